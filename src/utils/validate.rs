use once_cell::sync::Lazy;
use regex::Regex;

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s/]+$").expect("Invalid identifier regex"));

static COMMENT_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("Invalid comment url regex")
});

const MAX_IDENTIFIER_LEN: usize = 128;

/// 校验学生、作业、团队、仓库等标识符
pub fn validate_identifier(id: &str) -> Result<(), &'static str> {
    // 标识符长度校验：1 <= x <= 128
    if id.is_empty() {
        return Err("Identifier must not be empty");
    }
    if id.chars().count() > MAX_IDENTIFIER_LEN {
        return Err("Identifier must be at most 128 characters");
    }
    // 标识符会出现在 URL 路径中：不允许空白字符与斜杠
    if !IDENTIFIER_RE.is_match(id) {
        return Err("Identifier must not contain whitespace or '/'");
    }
    Ok(())
}

/// 校验评论投递地址，只接受 http(s)
pub fn validate_comment_url(url: &str) -> Result<(), &'static str> {
    if !COMMENT_URL_RE.is_match(url) {
        return Err("Comment URL must be an absolute http(s) URL");
    }
    Ok(())
}
