/// An entry of the shared ingredient catalog, filled as recipes are saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub measurement_unit: String,
}
