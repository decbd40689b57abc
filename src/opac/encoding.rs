//! # 幔分数文件名编码
//!
//! 将幔质量分数格式化为规格化科学记数法标记：一位有效数字 +
//! 两位带符号指数，例如 0.2 → `2e-01`，0.00001 → `1e-05`。
//! 标记嵌入输出文件名，跨多个数量级保持简短、可排序、无歧义。
//!
//! ## 舍入规则
//! 基于最短往返十进制表示做四舍五入（half away from zero），
//! 因此 0.15 → `2e-01`，不受二进制浮点表示略小于 0.15 的影响。
//!
//! ## 依赖关系
//! - 被 `opac/planner.rs` 使用
//! - 无外部模块依赖

/// 编码幔分数，输入须在 (0, 1] 内（由 `Mantle::new` 保证）
pub fn format_mantle_fraction(fraction: f64) -> String {
    // {:e} 给出最短往返表示，如 "1.5e-1"、"2e-1"、"1e0"
    let sci = format!("{:e}", fraction);
    let (mantissa, exp) = sci.split_once('e').unwrap();
    let mut exp: i32 = exp.parse().unwrap();

    // 十进制有效数字序列，如 "15"、"2"、"1"
    let digits: Vec<u32> = mantissa
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| c.to_digit(10).unwrap())
        .collect();

    // 按余数是否达到一半决定首位进位
    let mut leading = digits[0];
    if digits.len() > 1 && digits[1] >= 5 {
        leading += 1;
    }

    // 进位到 10 时提升指数
    if leading == 10 {
        leading = 1;
        exp += 1;
    }

    format!("{}e{:+03}", leading, exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        assert_eq!(format_mantle_fraction(0.2), "2e-01");
        assert_eq!(format_mantle_fraction(0.001), "1e-03");
        assert_eq!(format_mantle_fraction(0.00001), "1e-05");
        assert_eq!(format_mantle_fraction(1.0), "1e+00");
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 0.15 的二进制表示略小于 0.15，但十进制舍入必须进位
        assert_eq!(format_mantle_fraction(0.15), "2e-01");
        assert_eq!(format_mantle_fraction(0.25), "3e-01");
        assert_eq!(format_mantle_fraction(0.35), "4e-01");
        assert_eq!(format_mantle_fraction(0.0005), "5e-04");
    }

    #[test]
    fn test_rounds_not_truncates() {
        assert_eq!(format_mantle_fraction(0.14), "1e-01");
        assert_eq!(format_mantle_fraction(0.16), "2e-01");
        assert_eq!(format_mantle_fraction(0.149), "1e-01");
        assert_eq!(format_mantle_fraction(0.151), "2e-01");
    }

    #[test]
    fn test_mantissa_carry_bumps_exponent() {
        assert_eq!(format_mantle_fraction(0.95), "1e+00");
        assert_eq!(format_mantle_fraction(0.999), "1e+00");
        assert_eq!(format_mantle_fraction(0.095), "1e-01");
    }

    #[test]
    fn test_token_pattern() {
        let pattern = regex::Regex::new(r"^\de[+-]\d\d$").unwrap();
        for &f in &[
            1.0, 0.9, 0.5, 0.2, 0.15, 0.1, 0.05, 0.013, 0.001, 0.0007, 0.00001, 0.000004,
        ] {
            let token = format_mantle_fraction(f);
            assert!(pattern.is_match(&token), "bad token {} for {}", token, f);
        }
    }

    #[test]
    fn test_exponent_recovers_magnitude() {
        for &(f, exp) in &[(0.2, -1), (0.05, -2), (0.001, -3), (0.00001, -5), (1.0, 0)] {
            let token = format_mantle_fraction(f);
            let parsed: i32 = token[2..].parse().unwrap();
            assert_eq!(parsed, exp, "exponent mismatch for {}", f);
        }
    }

    #[test]
    fn test_idempotent_under_reencoding() {
        for &f in &[0.2, 0.15, 0.55, 0.013, 0.001, 0.00001, 0.95, 1.0] {
            let token = format_mantle_fraction(f);
            // 解码标记再编码，结果不变
            let digit: f64 = token[..1].parse().unwrap();
            let exp: i32 = token[2..].parse().unwrap();
            let decoded = digit * 10f64.powi(exp);
            assert_eq!(format_mantle_fraction(decoded), token, "not stable for {}", f);
        }
    }
}
