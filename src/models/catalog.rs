use super::grant::Grant;

#[derive(Debug)]
pub struct Catalog {
    pub grants: &'static [Grant],
    pub slugs_map: phf::Map<&'static str, usize>,
}
