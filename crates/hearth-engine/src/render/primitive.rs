/// Unit-sized meshes the scene is built from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Primitive {
    Box,
    Cylinder,
    Cone,
    Prism,
    Plane,
}

impl Primitive {
    pub const ALL: [Primitive; 5] = [
        Primitive::Box,
        Primitive::Cylinder,
        Primitive::Cone,
        Primitive::Prism,
        Primitive::Plane,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Box => "box",
            Primitive::Cylinder => "cylinder",
            Primitive::Cone => "cone",
            Primitive::Prism => "prism",
            Primitive::Plane => "plane",
        }
    }
}

/// Issues geometry draws for unit primitives.
///
/// A draw uses whatever model/view/projection and surface uniforms are current; it
/// takes no parameters of its own.
pub trait PrimitiveRenderer {
    /// Prepares GPU buffers for `primitive`. Called once per primitive during scene setup.
    fn load_mesh(&mut self, primitive: Primitive) {
        let _ = primitive;
    }

    fn draw(&mut self, primitive: Primitive);
}
