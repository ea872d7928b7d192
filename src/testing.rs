use crate::skyline::{Building, Coord, KeyPoint};
use rand::Rng;

pub fn init_test() {
    drop(env_logger::builder().is_test(true).try_init());
}

/// Skyline computed straight from the definition: at every edge x, the height
/// is the tallest building with `left <= x < right`.
pub fn brute_force_skyline(buildings: &[Building]) -> Vec<KeyPoint> {
    let mut xs: Vec<Coord> = buildings.iter().flat_map(|b| [b.left, b.right]).collect();
    xs.sort();
    xs.dedup();

    let mut skyline = vec![KeyPoint::GROUND];
    let mut current = 0;
    for &x in xs.iter() {
        let height = buildings
            .iter()
            .filter(|b| b.left <= x && x < b.right)
            .map(|b| b.height)
            .max()
            .unwrap_or(0);
        if height != current {
            skyline.push(KeyPoint::new(x, height));
            current = height;
        }
    }
    skyline
}

/// `count` buildings with left edges in `0..span` and heights in `0..=max_height`.
pub fn random_buildings(
    rng: &mut impl Rng,
    count: usize,
    span: Coord,
    max_height: Coord,
) -> Vec<Building> {
    (0..count)
        .map(|id| {
            let left = rng.gen_range(0..span);
            let right = left + rng.gen_range(1..=span / 2 + 1);
            Building::new(left, rng.gen_range(0..=max_height), right, id)
        })
        .collect()
}
