/// Provides validated string representation of bit sequence.
///
/// '0' is interpreted as _0_.
/// '1' is interpreted as _1_.
/// '_' is just ignored.
///
/// # Examples
/// ```
/// use louds_dict::BitString;
///
/// let bs = BitString::new("01");
/// assert_eq!(bs.str(), "01");
///
/// let bs = BitString::new("0111_0101");
/// assert_eq!(bs.str(), "01110101");
/// ```
///
/// # Panics
/// When:
/// - `s` contains any character other than '0', '1', and '_'.
/// - `s` does not contain any '0' or '1'
pub struct BitString(String);

impl BitString {
    /// Constructor.
    pub fn new(s: &str) -> BitString {
        let parsed: String = s
            .chars()
            .filter(|c| match c {
                '0' | '1' => true,
                '_' => false,
                _ => panic!("`str` must consist of '0' or '1'. '{}' included.", c),
            })
            .collect();
        assert!(!parsed.is_empty(), "`str` must contain any '0' or '1'.");

        BitString(String::from(parsed))
    }

    /// Getter.
    pub fn str(&self) -> &str {
        &self.0
    }
}
