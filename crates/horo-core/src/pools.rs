//! Fixed fortune pools.
//!
//! Each category has four rated texts ordered from best to worst, and advice
//! has six plain strings. Order matters: the hash picks entries by index.

/// A rated fortune text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolEntry {
    /// Star rating, 1-5.
    pub rating: u8,
    /// Fortune text.
    pub text: &'static str,
}

const fn entry(rating: u8, text: &'static str) -> PoolEntry {
    PoolEntry { rating, text }
}

/// Overall fortune pool.
pub const OVERALL: &[PoolEntry] = &[
    entry(5, "今日运势极佳，万事顺心如意！"),
    entry(4, "整体运势良好，适合开展新计划。"),
    entry(3, "运势平稳，保持平常心即可。"),
    entry(2, "今日稍有波折，需谨慎行事。"),
];

/// Love fortune pool.
pub const LOVE: &[PoolEntry] = &[
    entry(5, "桃花运旺盛，单身者有机会遇到心仪对象。"),
    entry(4, "感情甜蜜，与伴侣关系融洽。"),
    entry(3, "感情方面需要多加沟通和理解。"),
    entry(2, "注意控制情绪，避免不必要的争执。"),
];

/// Career fortune pool.
pub const CAREER: &[PoolEntry] = &[
    entry(5, "事业运极佳，有重要突破机会。"),
    entry(4, "工作上有不错的发展机会。"),
    entry(3, "工作平稳，按部就班完成任务。"),
    entry(2, "工作中可能遇到挑战，需要耐心应对。"),
];

/// Wealth fortune pool.
pub const WEALTH: &[PoolEntry] = &[
    entry(5, "财运亨通，有意外之财的可能。"),
    entry(4, "财运不错，投资理财有收获。"),
    entry(3, "财运平稳，注意理性消费。"),
    entry(2, "财务方面需谨慎，避免冲动消费。"),
];

/// Health fortune pool.
pub const HEALTH: &[PoolEntry] = &[
    entry(5, "身体状况极佳，精力充沛。"),
    entry(4, "健康状况良好，保持运动习惯。"),
    entry(3, "注意休息，避免过度劳累。"),
    entry(2, "身体稍有不适，需要多加调养。"),
];

/// Daily advice pool.
pub const ADVICE: &[&str] = &[
    "保持积极心态，抓住机会展现自己。",
    "多与人沟通交流，会有意外收获。",
    "今日适合学习新知识，提升自我。",
    "注意劳逸结合，保持身心健康。",
    "勇敢尝试新事物，会有不错的结果。",
    "保持耐心，事情会慢慢好转。",
];
