use serde::{Deserialize, Serialize};

/// Number of downhill slots exposed by the hosted trail table.
pub const DOWNHILL_SLOTS: usize = 8;

/// A named trail together with its downhill connection slots.
///
/// Slots mirror the upstream table and may be sparse; use
/// [`TrailRecord::connected_trails`] to obtain the outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailRecord {
    pub name: String,
    pub connections: Vec<Option<String>>,
}

impl TrailRecord {
    /// Build a record with every slot populated, in order.
    pub fn new<I, S>(name: impl Into<String>, connections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            connections: connections.into_iter().map(|c| Some(c.into())).collect(),
        }
    }

    /// Downhill neighbours present in the slots, order and duplicates preserved.
    pub fn connected_trails(&self) -> Vec<String> {
        self.connections.iter().flatten().cloned().collect()
    }
}

/// Row shape of the hosted `All_Trails` table.
///
/// Missing and `null` slots both deserialize to `None`; unknown columns are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailRow {
    pub trail_name: String,
    #[serde(default)]
    pub downhill_node_1: Option<String>,
    #[serde(default)]
    pub downhill_node_2: Option<String>,
    #[serde(default)]
    pub downhill_node_3: Option<String>,
    #[serde(default)]
    pub downhill_node_4: Option<String>,
    #[serde(default)]
    pub downhill_node_5: Option<String>,
    #[serde(default)]
    pub downhill_node_6: Option<String>,
    #[serde(default)]
    pub downhill_node_7: Option<String>,
    #[serde(default)]
    pub downhill_node_8: Option<String>,
}

impl TrailRow {
    fn slots(&self) -> [&Option<String>; DOWNHILL_SLOTS] {
        [
            &self.downhill_node_1,
            &self.downhill_node_2,
            &self.downhill_node_3,
            &self.downhill_node_4,
            &self.downhill_node_5,
            &self.downhill_node_6,
            &self.downhill_node_7,
            &self.downhill_node_8,
        ]
    }
}

impl From<TrailRow> for TrailRecord {
    fn from(row: TrailRow) -> Self {
        let connections = row.slots().into_iter().cloned().collect();
        TrailRecord {
            name: row.trail_name,
            connections,
        }
    }
}
