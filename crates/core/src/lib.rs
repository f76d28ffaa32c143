#![forbid(unsafe_code)]

pub mod ids {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PostId(i64);

    impl PostId {
        pub fn as_i64(self) -> i64 {
            self.0
        }

        pub fn try_new(value: i64) -> Result<Self, PostIdError> {
            if value <= 0 {
                return Err(PostIdError::NotPositive { value });
            }
            Ok(Self(value))
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum PostIdError {
        NotPositive { value: i64 },
    }

    impl std::fmt::Display for PostIdError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::NotPositive { value } => {
                    write!(f, "post id must be positive (got {value})")
                }
            }
        }
    }

    impl std::error::Error for PostIdError {}
}

pub mod model {
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct CustomTextEntry {
        pub id: i64,
        pub post_id: i64,
        pub text: String,
    }
}

pub mod text {
    // Caller-side sanitization boundary: markup and control characters never
    // reach the store. Stripped tags and control characters become single
    // spaces so adjacent words do not fuse.
    pub fn sanitize_plain_text(input: &str) -> String {
        let mut flat = String::with_capacity(input.len());
        let mut in_tag = false;
        for ch in input.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => {
                    in_tag = false;
                    flat.push(' ');
                }
                _ if in_tag => {}
                ch if ch.is_control() => flat.push(' '),
                ch => flat.push(ch),
            }
        }

        let mut out = String::with_capacity(flat.len());
        let mut pending_space = false;
        for ch in flat.chars() {
            if ch.is_whitespace() {
                pending_space = !out.is_empty();
                continue;
            }
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
        out
    }

    pub fn escape_html(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            match ch {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#039;"),
                ch => out.push(ch),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::ids::{PostId, PostIdError};
    use super::text::{escape_html, sanitize_plain_text};

    #[test]
    fn post_id_accepts_positive_values() {
        assert_eq!(PostId::try_new(1).map(PostId::as_i64), Ok(1));
        assert_eq!(PostId::try_new(i64::MAX).map(PostId::as_i64), Ok(i64::MAX));
    }

    #[test]
    fn post_id_rejects_zero_and_negative_values() {
        assert_eq!(
            PostId::try_new(0),
            Err(PostIdError::NotPositive { value: 0 })
        );
        assert_eq!(
            PostId::try_new(-1),
            Err(PostIdError::NotPositive { value: -1 })
        );
    }

    #[test]
    fn sanitize_strips_markup() {
        assert_eq!(
            sanitize_plain_text("hello <strong>world</strong>"),
            "hello world"
        );
        assert_eq!(sanitize_plain_text("<p>only text</p>"), "only text");
    }

    #[test]
    fn sanitize_drops_unterminated_tags() {
        assert_eq!(sanitize_plain_text("before <script after"), "before");
    }

    #[test]
    fn sanitize_flattens_control_characters_and_whitespace() {
        assert_eq!(sanitize_plain_text("a\tb\r\nc"), "a b c");
        assert_eq!(sanitize_plain_text("  padded   out  "), "padded out");
        assert_eq!(sanitize_plain_text("nul\u{0}byte"), "nul byte");
    }

    #[test]
    fn sanitize_keeps_plain_text_intact() {
        assert_eq!(sanitize_plain_text("Hello world"), "Hello world");
        assert_eq!(sanitize_plain_text(""), "");
    }

    #[test]
    fn escape_covers_html_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#039;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
