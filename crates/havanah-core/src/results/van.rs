//! Van-specific checks on detailed routes.

use crate::models::{DetailedRoute, Severity, VanWarning, WarningKind};

/// Elevation gain, in metres, above which the engine deserves a check.
pub const STEEP_ASCEND_METRES: f64 = 1000.0;

/// Warnings a van driver should read before taking `route`.
pub fn check_van_restrictions(route: &DetailedRoute) -> Vec<VanWarning> {
    let mut warnings = Vec::new();

    if let Some(ascend) = route.ascend.filter(|ascend| *ascend > STEEP_ASCEND_METRES) {
        warnings.push(VanWarning {
            kind: WarningKind::Elevation,
            message: format!(
                "Dénivelé important (+{}m), vérifiez votre moteur",
                ascend.round()
            ),
            severity: Severity::Warning,
            location: None,
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(ascend: Option<f64>) -> DetailedRoute {
        DetailedRoute {
            path: Vec::new(),
            instructions: Vec::new(),
            distance: 7620.9,
            duration: 907.3,
            ascend,
            descend: None,
        }
    }

    #[test]
    fn test_flat_route_has_no_warning() {
        assert!(check_van_restrictions(&route(Some(51.6))).is_empty());
        assert!(check_van_restrictions(&route(None)).is_empty());
        assert!(check_van_restrictions(&route(Some(1000.0))).is_empty());
    }

    #[test]
    fn test_steep_route_warns() {
        let warnings = check_van_restrictions(&route(Some(1234.4)));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::Elevation);
        assert_eq!(warnings[0].severity, Severity::Warning);
        assert!(warnings[0].message.contains("+1234m"));
    }
}
