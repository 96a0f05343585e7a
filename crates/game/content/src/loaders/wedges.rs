//! Wheel layout loader.
//!
//! Wedge layouts are RON files holding an ordered list of wedges. The
//! standard layout mirrors the show wheel: mostly cash, five bankrupts,
//! one lose-a-turn, one mystery, and a skinny t-shirt wedge.

use std::path::Path;

use jontune_core::{Wedge, WedgeSet};

use crate::loaders::{LoadResult, read_file};

/// The default 24-wedge layout.
pub fn standard_wheel() -> WedgeSet {
    WedgeSet::new(vec![
        Wedge::cash(1200),
        Wedge::mystery(),
        Wedge::cash(300),
        Wedge::cash(700),
        Wedge::lose_turn(),
        Wedge::cash(650),
        Wedge::bankrupt(),
        Wedge::tshirt(0.4),
        Wedge::bankrupt(),
        Wedge::cash(600),
        Wedge::cash(250),
        Wedge::cash(400),
        Wedge::cash(800),
        Wedge::bankrupt(),
        Wedge::cash(100),
        Wedge::cash(550),
        Wedge::cash(700),
        Wedge::bankrupt(),
        Wedge::cash(150),
        Wedge::cash(500),
        Wedge::cash(350),
        Wedge::cash(200),
        Wedge::bankrupt(),
        Wedge::cash(300),
    ])
}

/// Loader for wheel layouts from RON files.
pub struct WedgeLoader;

impl WedgeLoader {
    /// Load a wedge layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<WedgeSet> {
        let content = read_file(path)?;
        let wedges: Vec<Wedge> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse wedge RON: {}", e))?;
        Ok(WedgeSet::new(wedges))
    }

    /// Load a wedge layout, degrading to the standard wheel on failure.
    pub fn load_or_standard(path: &Path) -> WedgeSet {
        Self::load(path).unwrap_or_else(|_| standard_wheel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jontune_core::WedgeKind;
    use std::io::Write;

    #[test]
    fn standard_wheel_has_the_expected_shape() {
        let wheel = standard_wheel();
        assert_eq!(wheel.len(), 24);
        let bankrupts = wheel
            .wedges()
            .iter()
            .filter(|w| w.kind == WedgeKind::Bankrupt)
            .count();
        assert_eq!(bankrupts, 5);
        let mysteries = wheel
            .wedges()
            .iter()
            .filter(|w| w.kind == WedgeKind::Mystery)
            .count();
        assert_eq!(mysteries, 1);
        let tshirt = wheel
            .wedges()
            .iter()
            .find(|w| w.kind == WedgeKind::TShirt)
            .unwrap();
        assert_eq!(tshirt.relative_size, 0.4);
    }

    #[test]
    fn loads_wedges_from_ron() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                (kind: Cash(500), label: "$500", relative_size: 1.0),
                (kind: Bankrupt, label: "BANKRUPT", relative_size: 1.0),
                (kind: Mystery, label: "MYSTERY"),
            ]"#
        )
        .unwrap();

        let set = WedgeLoader::load(file.path()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0).unwrap().kind, WedgeKind::Cash(500));
        // relative_size defaults to 1 when omitted.
        assert_eq!(set.get(2).unwrap().relative_size, 1.0);
    }

    #[test]
    fn missing_file_degrades_to_standard() {
        let set = WedgeLoader::load_or_standard(Path::new("/nope/wheel.ron"));
        assert_eq!(set, standard_wheel());
    }
}
