use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

/// Prints text a word at a time, sleeping between words.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn write_line<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            return writeln!(out, "{text}");
        }

        for word in text.split(' ') {
            write!(out, "{word} ")?;
            out.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(out)
    }
}

/// `1234567` as `1,234,567`.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1,000")]
    #[case(100_000, "100,000")]
    #[case(1_234_567, "1,234,567")]
    fn thousands_separators(#[case] n: usize, #[case] expected: &str) {
        assert_eq!(thousands(n), expected);
    }

    #[test]
    fn paced_output_keeps_words() {
        let mut out = Vec::new();
        Pacer::from_millis(1)
            .write_line(&mut out, "two words")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "two words \n");
    }

    #[test]
    fn unpaced_output_is_plain() {
        let mut out = Vec::new();
        Pacer::default().write_line(&mut out, "a b\nc").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a b\nc\n");
    }
}
