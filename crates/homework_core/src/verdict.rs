/// Review outcome of a homework submission, keyed by the API `status` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    pub fn from_status(status: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|verdict| verdict.status() == status)
    }

    /// Status code as it appears in the API payload.
    pub fn status(self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_back_to_verdicts() {
        for verdict in Verdict::ALL {
            assert_eq!(Verdict::from_status(verdict.status()), Some(verdict));
        }
        assert_eq!(Verdict::from_status("Approved"), None);
        assert_eq!(Verdict::from_status(""), None);
    }
}
