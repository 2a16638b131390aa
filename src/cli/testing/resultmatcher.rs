use crate::cli::Output;

/// Helps check if a command returns the expected [`anyhow::Result<Output>`].
pub enum ResultMatcher<'a> {
    /// Asserts result is `Ok` and its payload equals the given value.
    OkExact(Output),

    /// Asserts result is an `Ok(Output::Str(_))` matching the given glob
    /// pattern. Matching is case-insensitive.
    OkStrGlob(&'a str),

    /// Asserts result is `Ok` and that the output's `to_string()` matches the
    /// given glob pattern. Matching is case-insensitive.
    OkGlob(&'a str),

    /// Asserts result is `Err` and that the error chain, formatted as
    /// `outer: inner: ...`, matches the given glob pattern. Matching is
    /// case-insensitive.
    ErrGlob(&'a str),
}

fn glob_matches(pattern: &str, s: &str) -> bool {
    wildmatch::WildMatch::new(pattern.to_lowercase().as_str()).matches(s.to_lowercase().as_str())
}

impl ResultMatcher<'_> {
    pub fn assert_matches(&self, result: anyhow::Result<Output>) {
        match self {
            ResultMatcher::OkExact(want_output) => {
                if let Ok(got_output) = &result {
                    if got_output == want_output {
                        return;
                    }
                    text_diff::print_diff(
                        format!("{:#?}", want_output).as_str(),
                        format!("{:#?}", got_output).as_str(),
                        "\n",
                    );
                    panic!("diff between want (red) and got (green), see above");
                }
                panic!("\n\twant: {:?}\n\tgot: {:?}\n", want_output, result);
            }
            ResultMatcher::OkStrGlob(pattern) => {
                let matches = matches!(
                    result,
                    Ok(Output::Str(ref got_string)) if glob_matches(pattern, got_string),
                );
                assert!(
                    matches,
                    "\n\twant matches: Ok({:?})\n\tgot: {:?}\n",
                    pattern, result
                );
            }
            ResultMatcher::OkGlob(pattern) => {
                let got = match &result {
                    Ok(output) => output.to_string(),
                    Err(e) => panic!("\n\twant matches: Ok({:?})\n\tgot: Err({:#})\n", pattern, e),
                };
                if glob_matches(pattern, &got) {
                    return;
                }
                text_diff::print_diff(pattern, &got, "\n");
                panic!("output does not match pattern, see diff above");
            }
            ResultMatcher::ErrGlob(pattern) => {
                let matches = matches!(
                    result,
                    Err(ref got_err) if glob_matches(pattern, &format!("{:#}", got_err)),
                );
                assert!(
                    matches,
                    "\n\twant matches: Err({:?})\n\tgot: {:?}\n",
                    pattern,
                    result.map_err(|e| format!("{:#}", e))
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("abc", "ABC", true)]
    #[case("a*c", "a\nb\nc", true)]
    #[case("a?c", "abbc", false)]
    #[case("", "", true)]
    fn test_glob_matches(#[case] pattern: &str, #[case] s: &str, #[case] want: bool) {
        assert_eq!(glob_matches(pattern, s), want);
    }

    #[test]
    fn test_err_glob_sees_whole_chain() {
        let err = anyhow::anyhow!("inner").context("outer");
        ResultMatcher::ErrGlob("outer: inner").assert_matches(Err(err));
    }

    #[test]
    #[should_panic]
    fn test_ok_glob_rejects_err() {
        ResultMatcher::OkGlob("*").assert_matches(Err(anyhow::anyhow!("boom")));
    }
}
