/// Component resolution - the domain core
///
/// Contains the value objects describing queries, stored records and
/// results, and the pure services that match versions against ranges and
/// aggregate matching records. Nothing in here performs I/O.
pub mod domain;
pub mod services;
