//! Draft-in-progress fields and compose-form focus.

/// Raw compose-form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftFields {
    /// Comma-separated primary recipients.
    pub to: String,
    /// Comma-separated carbon-copy recipients.
    pub cc: String,
    /// Comma-separated blind-copy recipients.
    pub bcc: String,
    pub subject: String,
    pub body: String,
}

impl DraftFields {
    /// Whether nothing has been typed in any field.
    pub fn is_blank(&self) -> bool {
        self.to.is_empty()
            && self.cc.is_empty()
            && self.bcc.is_empty()
            && self.subject.is_empty()
            && self.body.is_empty()
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Text of one field.
    pub fn field(&self, field: ComposeField) -> &str {
        match field {
            ComposeField::To => &self.to,
            ComposeField::Cc => &self.cc,
            ComposeField::Bcc => &self.bcc,
            ComposeField::Subject => &self.subject,
            ComposeField::Body => &self.body,
        }
    }

    /// Mutable text of one field.
    pub fn field_mut(&mut self, field: ComposeField) -> &mut String {
        match field {
            ComposeField::To => &mut self.to,
            ComposeField::Cc => &mut self.cc,
            ComposeField::Bcc => &mut self.bcc,
            ComposeField::Subject => &mut self.subject,
            ComposeField::Body => &mut self.body,
        }
    }
}

/// Which field of the compose form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposeField {
    #[default]
    To,
    Cc,
    Bcc,
    Subject,
    Body,
}

impl ComposeField {
    /// Form order.
    pub const ALL: [ComposeField; 5] = [
        ComposeField::To,
        ComposeField::Cc,
        ComposeField::Bcc,
        ComposeField::Subject,
        ComposeField::Body,
    ];

    /// Advance to next field (wrapping).
    pub fn next(self) -> Self {
        match self {
            Self::To => Self::Cc,
            Self::Cc => Self::Bcc,
            Self::Bcc => Self::Subject,
            Self::Subject => Self::Body,
            Self::Body => Self::To,
        }
    }

    /// Go to previous field (wrapping).
    pub fn prev(self) -> Self {
        match self {
            Self::To => Self::Body,
            Self::Cc => Self::To,
            Self::Bcc => Self::Cc,
            Self::Subject => Self::Bcc,
            Self::Body => Self::Subject,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::To => "To",
            Self::Cc => "Cc",
            Self::Bcc => "Bcc",
            Self::Subject => "Subject",
            Self::Body => "Body",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut f = ComposeField::To;
        for _ in 0..ComposeField::ALL.len() {
            f = f.next();
        }
        assert_eq!(f, ComposeField::To);
        assert_eq!(ComposeField::To.prev(), ComposeField::Body);
    }

    #[test]
    fn test_field_mut_and_clear() {
        let mut draft = DraftFields::default();
        assert!(draft.is_blank());
        draft.field_mut(ComposeField::Subject).push_str("Hi");
        assert_eq!(draft.field(ComposeField::Subject), "Hi");
        assert!(!draft.is_blank());
        draft.clear();
        assert!(draft.is_blank());
    }
}
