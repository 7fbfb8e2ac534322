/// content-type 到文件扩展名的查询能力
///
/// 返回零个或多个候选扩展名，采集任务只使用第一个。
pub trait ExtensionLookup: Send + Sync {
    fn extensions(&self, mime: &str) -> Vec<String>;
}

/// 内置的常见 MIME 类型表
#[derive(Debug, Default, Clone, Copy)]
pub struct MimeTable;

impl ExtensionLookup for MimeTable {
    fn extensions(&self, mime: &str) -> Vec<String> {
        let exts: &[&str] = match mime {
            // 音频流
            "audio/mpeg" => &["mpga", "mp2", "mp2a", "mp3", "m2a", "m3a"],
            "audio/mp3" => &["mp3"],
            "audio/aac" | "audio/aacp" => &["aac"],
            "audio/mp4" => &["m4a", "mp4a"],
            "audio/ogg" => &["oga", "ogg", "spx", "opus"],
            "audio/opus" => &["opus"],
            "audio/flac" | "audio/x-flac" => &["flac"],
            "audio/wav" | "audio/wave" | "audio/x-wav" => &["wav"],
            "audio/webm" => &["weba"],
            "audio/x-mpegurl" => &["m3u"],
            "audio/x-scpls" => &["pls"],
            "application/vnd.apple.mpegurl" => &["m3u8"],
            "application/ogg" => &["ogx"],
            // 视频流
            "video/mp4" => &["mp4", "mp4v", "mpg4"],
            "video/mp2t" => &["ts", "m2t", "m2ts", "mts"],
            "video/webm" => &["webm"],
            "video/ogg" => &["ogv"],
            "video/x-flv" => &["flv"],
            "video/quicktime" => &["mov", "qt"],
            // 文本与文档
            "text/html" => &["html", "htm", "shtml"],
            "text/plain" => &["txt", "text", "conf", "def", "list", "log", "in", "ini"],
            "text/css" => &["css"],
            "text/csv" => &["csv"],
            "text/xml" | "application/xml" => &["xml", "xsl", "xsd", "rng"],
            "application/json" => &["json", "map"],
            "application/javascript" | "text/javascript" => &["js", "mjs"],
            "application/pdf" => &["pdf"],
            "application/zip" => &["zip"],
            "application/gzip" => &["gz"],
            // 图片
            "image/png" => &["png"],
            "image/jpeg" => &["jpeg", "jpg", "jpe"],
            "image/gif" => &["gif"],
            "image/webp" => &["webp"],
            "image/svg+xml" => &["svg", "svgz"],
            _ => &[],
        };
        exts.iter().map(|s| s.to_string()).collect()
    }
}

/// 从 Content-Type 头解析扩展名
///
/// 会去掉 `; charset=...` 等参数并统一为小写，未匹配时返回 `None`。
pub fn resolve_extension(lookup: &dyn ExtensionLookup, content_type: &str) -> Option<String> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if essence.is_empty() {
        return None;
    }

    lookup.extensions(&essence).into_iter().next()
}
