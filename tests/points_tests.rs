// Host-side tests for the CPU-side point cloud staging buffer.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod points {
    include!("../src/points.rs");
}

use particles_core::{ColorMode, ParticleOptions, ParticleSystem, ParticleType};
use points::PointCloud;

fn system(count: usize) -> ParticleSystem<PointCloud> {
    let options = ParticleOptions {
        count,
        particle_type: ParticleType::Sphere,
        color_mode: ColorMode::Rainbow,
        ..ParticleOptions::default()
    };
    ParticleSystem::new(options, PointCloud::new(), 11).unwrap()
}

#[test]
fn construction_allocates_and_stages_vertices() {
    let mut sys = system(40);
    let cloud = sys.sink_mut();
    assert!(cloud.is_live());
    assert_eq!(cloud.generation(), 1);
    assert_eq!(cloud.capacity(), 40);
    assert_eq!(cloud.take_dirty().map(<[_]>::len), Some(40));
    // Drained until the next upload
    assert!(cloud.take_dirty().is_none());
    assert_eq!(cloud.vertices().len(), 40);
}

#[test]
fn every_update_marks_the_cloud_dirty() {
    let mut sys = system(8);
    sys.sink_mut().take_dirty();
    sys.update(0.016, 0.016);
    assert!(sys.sink().is_dirty());
    let staged = sys.sink_mut().take_dirty().unwrap().to_vec();
    assert_eq!(staged[3].position, sys.ensemble().positions[3].to_array());
    assert_eq!(staged[3].size, sys.ensemble().sizes[3]);
}

#[test]
fn rebuild_bumps_generation() {
    let mut sys = system(8);
    let before = sys.sink().generation();
    sys.change_particle_type(ParticleType::Explosion);
    assert_eq!(sys.sink().generation(), before + 1);
    assert!(sys.sink().is_live());
    assert!(sys.sink().is_dirty());
}

#[test]
fn dispose_leaves_nothing_to_draw() {
    let sys = system(16);
    let mut cloud = sys.dispose();
    assert!(!cloud.is_live());
    assert_eq!(cloud.capacity(), 0);
    assert!(cloud.vertices().is_empty());
    assert!(cloud.take_dirty().is_none());
}
