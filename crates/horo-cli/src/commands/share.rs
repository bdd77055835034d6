use clap::ValueEnum;

use super::Context;

/// Where to share today's fortune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShareTarget {
    /// Copy the share text and link to the clipboard
    Copy,
    /// Copy the link for pasting into WeChat
    Wechat,
    /// Print the QQ share page URL
    Qq,
}

pub fn run(ctx: &Context, target: ShareTarget, sign: Option<&str>) -> Result<(), String> {
    let mut app = ctx.app_with_sign(sign)?;

    let result = match target {
        ShareTarget::Copy => app.copy_share_link().map(|_| ()),
        ShareTarget::Wechat => app.share_to_wechat().map(|_| ()),
        ShareTarget::Qq => app.share_to_qq().map(|_| ()),
    };

    result.map_err(|e| e.to_string())
}
