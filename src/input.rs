//! 입력 문자열의 숫자 변환. 실패는 오류가 아니라 기본값 대체로 처리한다.

/// 앞부분의 십진수 표기만 읽는다. `"6.5 l"` → 6.5, `"abc"` → None.
///
/// 부호, 소수점, 지수 표기를 허용하며 무한대/NaN은 받지 않는다.
pub fn parse_lenient(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    // 지수부는 뒤에 숫자가 있을 때만 포함한다.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 단가 입력. 양수가 아니거나 읽을 수 없으면 `default`.
pub fn coerce_price(text: &str, default: f64) -> f64 {
    match parse_lenient(text) {
        Some(v) if v > 0.0 => v,
        _ => default,
    }
}

/// 소비량 입력. 읽을 수 없거나 음수이면 0.
pub fn coerce_consumption(text: &str) -> f64 {
    match parse_lenient(text) {
        Some(v) if v > 0.0 => v,
        _ => 0.0,
    }
}
