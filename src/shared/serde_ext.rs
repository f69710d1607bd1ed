use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
///
/// Record stores and scanner requests written by other tools emit `null`
/// for empty lists and strings.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
