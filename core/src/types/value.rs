use std::fmt;

/// Attribute value in a parsed case-metadata or annotation document
///
/// Values fold out of whitespace-tokenized records, and the folded form is
/// explicit in the type: a key with no remaining tokens carries
/// [`AttrValue::None`], a single token folds to a scalar, several tokens
/// fold to a list. Keys that legitimately repeat in the annotation grammar
/// accumulate into [`AttrValue::List`] in file order rather than replacing
/// the earlier value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum AttrValue {
    /// Key present with no accompanying value tokens
    None,
    /// Base-10 integer token
    Int(i64),
    /// Any other single token
    Text(String),
    /// Multi-token value, or the accumulation of a repeated key
    List(Vec<AttrValue>),
}

impl AttrValue {
    /// Parses one raw token into its tagged scalar form
    ///
    /// A token that parses as a base-10 integer becomes [`AttrValue::Int`];
    /// anything else stays [`AttrValue::Text`]. Both file grammars funnel
    /// numeric coercion through this single total function.
    pub fn from_token(token: &str) -> Self {
        match token.parse::<i64>() {
            Ok(n) => AttrValue::Int(n),
            Err(_) => AttrValue::Text(token.to_string()),
        }
    }

    /// Returns the integer payload, if this is an integer scalar
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a text scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the element slice, if this is a list
    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns whether this is the no-value marker
    pub fn is_none(&self) -> bool {
        matches!(self, AttrValue::None)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::None => Ok(()),
            AttrValue::Int(n) => write!(f, "{}", n),
            AttrValue::Text(s) => write!(f, "{}", s),
            AttrValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_integer() {
        assert_eq!(AttrValue::from_token("3"), AttrValue::Int(3));
        assert_eq!(AttrValue::from_token("-12"), AttrValue::Int(-12));
        assert_eq!(AttrValue::from_token("007"), AttrValue::Int(7));
    }

    #[test]
    fn test_from_token_text() {
        assert_eq!(
            AttrValue::from_token("MALIGNANT"),
            AttrValue::Text("MALIGNANT".to_string())
        );
        assert_eq!(
            AttrValue::from_token("3.5"),
            AttrValue::Text("3.5".to_string())
        );
        assert_eq!(AttrValue::from_token(""), AttrValue::Text(String::new()));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(AttrValue::Int(5).as_int(), Some(5));
        assert_eq!(AttrValue::Text("x".to_string()).as_int(), None);
        assert_eq!(AttrValue::Text("x".to_string()).as_str(), Some("x"));
        assert_eq!(AttrValue::Int(5).as_str(), None);
        assert!(AttrValue::None.is_none());
        assert!(!AttrValue::Int(0).is_none());
    }

    #[test]
    fn test_display_list() {
        let value = AttrValue::List(vec![
            AttrValue::Text("CALCIFICATION".to_string()),
            AttrValue::Int(2),
        ]);
        assert_eq!(value.to_string(), "CALCIFICATION 2");
        assert_eq!(AttrValue::None.to_string(), "");
    }
}
