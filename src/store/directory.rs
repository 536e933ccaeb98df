use std::collections::HashMap;

/// Display data for a counterparty in the conversation views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighbourProfile {
    pub name: String,
    pub avatar: String,
}

/// Fixed lookup of known counterparty identifiers. Unknown identifiers
/// resolve to a placeholder profile rather than failing, so a conversation
/// with an undirectoried neighbour still renders.
pub struct NeighbourDirectory {
    entries: HashMap<String, NeighbourProfile>,
}

impl Default for NeighbourDirectory {
    fn default() -> Self {
        let known = [
            ("elderly-neighbor", "Margaret Smith", "👵"),
            ("busy-parent", "David Johnson", "👨"),
            ("handy-helper", "Mike Wilson", "🔧"),
            ("student-tutor", "Sarah Chen", "📚"),
        ];
        let entries = known
            .into_iter()
            .map(|(id, name, avatar)| {
                (
                    id.to_string(),
                    NeighbourProfile {
                        name: name.to_string(),
                        avatar: avatar.to_string(),
                    },
                )
            })
            .collect();
        Self { entries }
    }
}

impl NeighbourDirectory {
    pub fn lookup(&self, id: &str) -> NeighbourProfile {
        self.entries.get(id).cloned().unwrap_or_else(|| NeighbourProfile {
            name: "Unknown User".to_string(),
            avatar: "👤".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_counterparty_resolves() {
        let directory = NeighbourDirectory::default();
        assert_eq!(directory.lookup("handy-helper").name, "Mike Wilson");
    }

    #[test]
    fn unknown_counterparty_gets_placeholder() {
        let directory = NeighbourDirectory::default();
        let profile = directory.lookup("nobody-here");
        assert_eq!(profile.name, "Unknown User");
        assert_eq!(profile.avatar, "👤");
    }
}
