use particles_core::{Ensemble, ParticleVertex, PointsSink};

/// CPU staging for the particle instance buffer.
///
/// The particle system drives this through `PointsSink`; the renderer drains
/// it once per frame. `generation` changes whenever the ensemble is replaced
/// so the GPU buffer can be recreated at the new size.
#[derive(Debug, Default)]
pub struct PointCloud {
    vertices: Vec<ParticleVertex>,
    capacity: usize,
    generation: u64,
    dirty: bool,
    live: bool,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Vertices to draw this frame; empty once released.
    pub fn vertices(&self) -> &[ParticleVertex] {
        if self.live {
            &self.vertices
        } else {
            &[]
        }
    }

    /// Vertices changed since the last call, if any.
    pub fn take_dirty(&mut self) -> Option<&[ParticleVertex]> {
        if !self.live || !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(&self.vertices)
    }
}

impl PointsSink for PointCloud {
    fn allocate(&mut self, count: usize) {
        self.vertices.clear();
        self.vertices.reserve(count);
        self.capacity = count;
        self.generation = self.generation.wrapping_add(1);
        self.live = true;
        self.dirty = false;
    }

    fn upload(&mut self, ensemble: &Ensemble) {
        ensemble.pack_vertices(&mut self.vertices);
        self.dirty = true;
    }

    fn release(&mut self) {
        self.vertices = Vec::new();
        self.capacity = 0;
        self.live = false;
        self.dirty = false;
    }
}
