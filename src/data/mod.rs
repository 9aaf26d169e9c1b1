/// Data layer: core types, loading, and queries.
///
/// Architecture:
/// ```text
///  marketing_campaign_lifecycle.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse once → Arc<Table>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Record>, source order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  filter / stage counts / tool counts / lookup
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
