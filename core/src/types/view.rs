use super::AttrValue;
use std::collections::BTreeMap;
use std::fmt;

/// Breast laterality (left/right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Laterality {
    Left,
    Right,
}

impl Laterality {
    /// Returns the opposite laterality
    pub fn opposite(&self) -> Self {
        match self {
            Laterality::Left => Laterality::Right,
            Laterality::Right => Laterality::Left,
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Laterality::Left => "left",
            Laterality::Right => "right",
        }
    }
}

impl fmt::Display for Laterality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// View position enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum ViewPosition {
    Cc,  // Cranio-caudal
    Mlo, // Medio-lateral oblique
}

impl ViewPosition {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            ViewPosition::Cc => "cc",
            ViewPosition::Mlo => "mlo",
        }
    }
}

impl fmt::Display for ViewPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Screening view combining laterality and view position
///
/// A case-metadata file records one block per standard view, keyed by
/// tokens such as `LEFT_CC` or `RIGHT_MLO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseView {
    pub laterality: Laterality,
    pub position: ViewPosition,
}

impl CaseView {
    /// Creates a new CaseView
    pub fn new(laterality: Laterality, position: ViewPosition) -> Self {
        Self {
            laterality,
            position,
        }
    }

    /// Returns the key naming this view's block in a case-metadata file
    pub fn token(&self) -> &'static str {
        match (self.laterality, self.position) {
            (Laterality::Left, ViewPosition::Cc) => "LEFT_CC",
            (Laterality::Left, ViewPosition::Mlo) => "LEFT_MLO",
            (Laterality::Right, ViewPosition::Cc) => "RIGHT_CC",
            (Laterality::Right, ViewPosition::Mlo) => "RIGHT_MLO",
        }
    }

    /// Parses a case-metadata key into a view, if it names one
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "LEFT_CC" => Some(CaseView::new(Laterality::Left, ViewPosition::Cc)),
            "LEFT_MLO" => Some(CaseView::new(Laterality::Left, ViewPosition::Mlo)),
            "RIGHT_CC" => Some(CaseView::new(Laterality::Right, ViewPosition::Cc)),
            "RIGHT_MLO" => Some(CaseView::new(Laterality::Right, ViewPosition::Mlo)),
            _ => None,
        }
    }
}

impl fmt::Display for CaseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.laterality.simple_name(),
            self.position.simple_name()
        )
    }
}

// Serialized as the file token so view maps keep string keys.
#[cfg(feature = "json")]
impl serde::Serialize for CaseView {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

/// Standard screening views (4 views for a complete bilateral study),
/// in case-metadata file order
pub const STANDARD_CASE_VIEWS: [CaseView; 4] = [
    CaseView {
        laterality: Laterality::Left,
        position: ViewPosition::Cc,
    },
    CaseView {
        laterality: Laterality::Left,
        position: ViewPosition::Mlo,
    },
    CaseView {
        laterality: Laterality::Right,
        position: ViewPosition::Cc,
    },
    CaseView {
        laterality: Laterality::Right,
        position: ViewPosition::Mlo,
    },
];

/// Per-view record from a case-metadata file
///
/// Carries whether an annotation overlay accompanies the view, plus the
/// remaining attributes of the view block (scan dimensions, digitizer
/// bit depth, and so on) with numeric values coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ViewRecord {
    /// Whether an annotation overlay accompanies this view
    pub has_overlay: bool,
    /// Remaining attributes of the view block
    pub attributes: BTreeMap<String, AttrValue>,
}

impl ViewRecord {
    /// Returns a view attribute by key
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Scan line count (image rows), when recorded
    pub fn lines(&self) -> Option<i64> {
        self.attr("LINES")?.as_int()
    }

    /// Pixels per scan line (image columns), when recorded
    pub fn pixels_per_line(&self) -> Option<i64> {
        self.attr("PIXELS_PER_LINE")?.as_int()
    }

    /// Raster shape (rows, cols) for masks over this view's image
    pub fn shape(&self) -> Option<(usize, usize)> {
        let rows = usize::try_from(self.lines()?).ok()?;
        let cols = usize::try_from(self.pixels_per_line()?).ok()?;
        Some((rows, cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for view in STANDARD_CASE_VIEWS {
            assert_eq!(CaseView::from_token(view.token()), Some(view));
        }
        assert_eq!(CaseView::from_token("LEFT_ML"), None);
        assert_eq!(CaseView::from_token("SUBTLETY"), None);
    }

    #[test]
    fn test_display() {
        let view = CaseView::new(Laterality::Left, ViewPosition::Cc);
        assert_eq!(view.to_string(), "left cc");
        let view = CaseView::new(Laterality::Right, ViewPosition::Mlo);
        assert_eq!(view.to_string(), "right mlo");
    }

    #[test]
    fn test_opposite_laterality() {
        assert_eq!(Laterality::Left.opposite(), Laterality::Right);
        assert_eq!(Laterality::Right.opposite(), Laterality::Left);
    }

    #[test]
    fn test_standard_views_constant() {
        assert_eq!(STANDARD_CASE_VIEWS.len(), 4);
        assert_eq!(STANDARD_CASE_VIEWS[0].token(), "LEFT_CC");
        assert_eq!(STANDARD_CASE_VIEWS[1].token(), "LEFT_MLO");
        assert_eq!(STANDARD_CASE_VIEWS[2].token(), "RIGHT_CC");
        assert_eq!(STANDARD_CASE_VIEWS[3].token(), "RIGHT_MLO");
    }

    #[test]
    fn test_view_record_shape() {
        let mut attributes = BTreeMap::new();
        attributes.insert("LINES".to_string(), AttrValue::Int(4696));
        attributes.insert("PIXELS_PER_LINE".to_string(), AttrValue::Int(3024));
        let record = ViewRecord {
            has_overlay: true,
            attributes,
        };
        assert_eq!(record.lines(), Some(4696));
        assert_eq!(record.pixels_per_line(), Some(3024));
        assert_eq!(record.shape(), Some((4696, 3024)));
    }

    #[test]
    fn test_view_record_shape_missing() {
        let record = ViewRecord {
            has_overlay: false,
            attributes: BTreeMap::new(),
        };
        assert_eq!(record.lines(), None);
        assert_eq!(record.shape(), None);
    }
}
