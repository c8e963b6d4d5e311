//! Form field value objects

/// Number of digits in a complete zipcode
pub const ZIPCODE_DIGITS: usize = 8;

/// Identifies a field of the address form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Zipcode,
    Street,
    StreetNumber,
    Complement,
    Neighborhood,
    City,
    State,
}

impl FieldName {
    /// Fields in form order
    pub const ALL: [FieldName; 7] = [
        FieldName::Zipcode,
        FieldName::Street,
        FieldName::StreetNumber,
        FieldName::Complement,
        FieldName::Neighborhood,
        FieldName::City,
        FieldName::State,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Zipcode => "Zipcode",
            Self::Street => "Street",
            Self::StreetNumber => "Number",
            Self::Complement => "Complement",
            Self::Neighborhood => "Neighborhood",
            Self::City => "City",
            Self::State => "State",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Zipcode => "00000-000",
            Self::Street => "Av. Paulista",
            Self::StreetNumber => "123",
            Self::Complement => "apt. 100",
            Self::Neighborhood => "Bela Vista",
            Self::City => "São Paulo",
            Self::State => "Select a state",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Complement)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Zipcode text kept in `99999-999` mask form
    Zipcode(String),
    /// Selected region code
    Region(Option<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new free text field
    pub fn text(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new masked zipcode field
    pub fn zipcode(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Zipcode(String::new()),
        }
    }

    /// Create a new region selector
    pub fn region(name: FieldName) -> Self {
        Self {
            name,
            value: FieldValue::Region(None),
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    /// Get the text value (returns the selected code for region fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Zipcode(s) => s,
            FieldValue::Region(code) => code.as_deref().unwrap_or(""),
        }
    }

    /// Get the selected region code (None for text fields)
    pub fn as_region(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Region(code) => code.as_deref(),
            _ => None,
        }
    }

    /// Set the text value verbatim
    pub fn set_text(&mut self, value: impl Into<String>) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Zipcode(s) => *s = value.into(),
            FieldValue::Region(code) => *code = Some(value.into()),
        }
    }

    /// Set the selected region
    pub fn set_region(&mut self, code: Option<String>) {
        self.value = FieldValue::Region(code);
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Zipcode(s) => {
                if !c.is_ascii_digit() {
                    return;
                }
                let digits = s.chars().filter(char::is_ascii_digit).count();
                if digits >= ZIPCODE_DIGITS {
                    return;
                }
                if digits == 5 && !s.ends_with('-') {
                    s.push('-');
                }
                s.push(c);
            }
            FieldValue::Region(_) => {}
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Zipcode(s) => {
                s.pop();
                if s.ends_with('-') {
                    s.pop();
                }
            }
            FieldValue::Region(code) => *code = None,
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Zipcode(s) => s.clear(),
            FieldValue::Region(code) => *code = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(field: &mut FormField, input: &str) {
        for c in input.chars() {
            field.push_char(c);
        }
    }

    #[test]
    fn test_text_push_and_pop() {
        let mut field = FormField::text(FieldName::Street);
        type_into(&mut field, "Rua");
        assert_eq!(field.as_text(), "Rua");
        field.pop_char();
        assert_eq!(field.as_text(), "Ru");
    }

    #[test]
    fn test_zipcode_mask_inserts_dash() {
        let mut field = FormField::zipcode(FieldName::Zipcode);
        type_into(&mut field, "09405400");
        assert_eq!(field.as_text(), "09405-400");
    }

    #[test]
    fn test_zipcode_mask_ignores_non_digits() {
        let mut field = FormField::zipcode(FieldName::Zipcode);
        type_into(&mut field, "09a4-05 400");
        assert_eq!(field.as_text(), "09405-400");
    }

    #[test]
    fn test_zipcode_mask_caps_at_eight_digits() {
        let mut field = FormField::zipcode(FieldName::Zipcode);
        type_into(&mut field, "0940540012");
        assert_eq!(field.as_text(), "09405-400");
    }

    #[test]
    fn test_zipcode_backspace_drops_trailing_dash() {
        let mut field = FormField::zipcode(FieldName::Zipcode);
        type_into(&mut field, "094054");
        assert_eq!(field.as_text(), "09405-4");
        field.pop_char();
        assert_eq!(field.as_text(), "09405");
    }

    #[test]
    fn test_region_field() {
        let mut field = FormField::region(FieldName::State);
        assert_eq!(field.as_region(), None);
        assert!(field.is_empty());
        field.push_char('S');
        assert_eq!(field.as_region(), None);
        field.set_region(Some("SP".to_string()));
        assert_eq!(field.as_region(), Some("SP"));
        assert_eq!(field.as_text(), "SP");
        field.pop_char();
        assert_eq!(field.as_region(), None);
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text(FieldName::City);
        field.set_text("Santos");
        field.clear();
        assert!(field.is_empty());
    }

    #[test]
    fn test_only_complement_is_optional() {
        let optional: Vec<FieldName> = FieldName::ALL
            .into_iter()
            .filter(|f| !f.is_required())
            .collect();
        assert_eq!(optional, vec![FieldName::Complement]);
    }
}
