const MAX_OUTPUT_LENGTH: usize = 2_000;

/// Shorten raw tool output for log lines, keeping its head and tail.
pub fn truncate_output(output: &str) -> String {
    let chars: Vec<char> = output.chars().collect();
    if chars.len() <= MAX_OUTPUT_LENGTH {
        return output.to_string();
    }
    let half = MAX_OUTPUT_LENGTH / 2;
    let start: String = chars[..half].iter().collect();
    let end: String = chars[chars.len() - half..].iter().collect();
    format!(
        "{}\n... [truncated {} chars] ...\n{}",
        start,
        chars.len() - MAX_OUTPUT_LENGTH,
        end
    )
}
