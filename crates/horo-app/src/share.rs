//! Share text and share URL composition.

use horo_core::{CalendarDay, display_name_for};

/// Headline shared by every share action, e.g. `我的狮子座今日运势：2026年10月16日`.
pub fn share_title(sign_id: &str, day: CalendarDay) -> String {
    format!("我的{}今日运势：{}", display_name_for(sign_id), day.display())
}

/// Full text placed on the clipboard: headline, invitation, then the page URL.
pub fn copy_content(sign_id: &str, day: CalendarDay, page_url: &str) -> String {
    format!(
        "{}\n快来查看你的星座运势吧！\n{page_url}",
        share_title(sign_id, day)
    )
}

/// QQ share widget URL for the page.
pub fn qq_share_url(endpoint: &str, page_url: &str, title: &str) -> String {
    format!(
        "https://{endpoint}/widget/shareqq/index.html?url={}&title={}",
        urlencoding::encode(page_url),
        urlencoding::encode(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> CalendarDay {
        CalendarDay::from_ymd(2026, 10, 16).unwrap()
    }

    #[test]
    fn title_uses_display_name() {
        assert_eq!(share_title("leo", day()), "我的狮子座今日运势：2026年10月16日");
    }

    #[test]
    fn title_falls_back_for_unknown_sign() {
        assert_eq!(share_title("", day()), "我的未知星座今日运势：2026年10月16日");
    }

    #[test]
    fn copy_content_layout() {
        let text = copy_content("leo", day(), "https://stars.test/");
        insta::assert_snapshot!(text, @r"
        我的狮子座今日运势：2026年10月16日
        快来查看你的星座运势吧！
        https://stars.test/
        ");
    }

    #[test]
    fn qq_url_encodes_components() {
        let url = qq_share_url("connect.qq.com", "https://stars.test/?a=1&b=2", "我的");
        assert_eq!(
            url,
            "https://connect.qq.com/widget/shareqq/index.html\
             ?url=https%3A%2F%2Fstars.test%2F%3Fa%3D1%26b%3D2&title=%E6%88%91%E7%9A%84"
        );
    }
}
