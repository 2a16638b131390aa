/// Replaces characters that cannot appear in a file name on common platforms
/// with `_`. An empty result becomes `_`.
pub fn sanitize_file_stem(s: &str) -> String {
    let out = s
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>();
    if out.is_empty() || out == "." || out == ".." {
        return "_".into();
    }
    out
}
