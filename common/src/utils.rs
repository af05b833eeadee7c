use chrono::Utc;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distr::Alphanumeric;
use rand::Rng;

// RFC 3986 非保留字符之外全部编码
const RFC3986: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// 按RFC 3986进行百分号编码（OAuth签名要求）
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, RFC3986).to_string()
}

/// 生成指定长度的随机字母数字串
pub fn generate_nonce(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}

/// 当前Unix时间戳（秒）
pub fn unix_timestamp() -> i64 {
    Utc::now().timestamp()
}
