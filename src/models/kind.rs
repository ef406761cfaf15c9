use serde::Serialize;

/// Semantic category of an entry, derived from its location text.
/// The kind is never stored: existing documents only carry the free-text
/// location, so it is recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Kind {
    Vacation, // "urlaub"
    Sick,     // "krank"
    OnCall,   // "bereitschaft"
    Pause,    // "pause"
    Regular,  // anything else
}

impl Kind {
    /// Classify a free-text location into a Kind.
    /// Matching is exact after trimming and lowercasing.
    pub fn classify(location: &str) -> Self {
        match location.trim().to_lowercase().as_str() {
            "urlaub" => Kind::Vacation,
            "krank" => Kind::Sick,
            "bereitschaft" => Kind::OnCall,
            "pause" => Kind::Pause,
            _ => Kind::Regular,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Vacation => "vacation",
            Kind::Sick => "sick",
            Kind::OnCall => "on-call",
            Kind::Pause => "pause",
            Kind::Regular => "regular",
        }
    }

    /// Special kinds credit a flat day (or nothing); only Regular entries
    /// carry their own start/end times.
    pub fn is_special(&self) -> bool {
        !matches!(self, Kind::Regular)
    }

    /// Whether entries of this kind require a valid start/end time pair.
    pub fn requires_times(&self) -> bool {
        matches!(self, Kind::Regular)
    }

    /// Whether entries of this kind may own nested deployments.
    pub fn allows_deployments(&self) -> bool {
        matches!(self, Kind::OnCall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_reserved_keywords() {
        assert_eq!(Kind::classify("urlaub"), Kind::Vacation);
        assert_eq!(Kind::classify("krank"), Kind::Sick);
        assert_eq!(Kind::classify("bereitschaft"), Kind::OnCall);
        assert_eq!(Kind::classify("pause"), Kind::Pause);
    }

    #[test]
    fn classify_is_case_insensitive_and_trims() {
        assert_eq!(Kind::classify("  Urlaub "), Kind::Vacation);
        assert_eq!(Kind::classify("KRANK"), Kind::Sick);
        assert_eq!(Kind::classify("Bereitschaft"), Kind::OnCall);
    }

    #[test]
    fn classify_everything_else_as_regular() {
        assert_eq!(Kind::classify("Office"), Kind::Regular);
        assert_eq!(Kind::classify("urlaub planung"), Kind::Regular);
        assert_eq!(Kind::classify(""), Kind::Regular);
    }

    #[test]
    fn gating_flags() {
        assert!(Kind::Regular.requires_times());
        assert!(!Kind::Vacation.requires_times());
        assert!(Kind::OnCall.allows_deployments());
        assert!(!Kind::Regular.allows_deployments());
    }
}
