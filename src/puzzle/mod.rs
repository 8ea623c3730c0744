//! Puzzle scene model.
//!
//! A [`Cube`] owns every piece of the puzzle and the two containers a piece
//! can live in: the whole assembly, and the temporary layer group that
//! rotates one slice independently of the rest. Pieces move between the two
//! explicitly via [`Cube::move_pieces`], which keeps their world transform.

/// Layer membership queries.
pub mod layer;
/// Face-turn notation.
pub mod notation;
/// Face uniformity check.
pub mod solved;

use glam::{IVec3, Vec3};

use crate::error::TurnError;
use crate::geometry::{snap_rotation, Axis, Pose, Ray, RayHit};

/// Distance between neighbouring piece centers.
pub const PIECE_SPACING: f32 = 1.0 / 3.0;

/// Grid settled piece translations are rounded to.
pub const SETTLE_GRID: f32 = PIECE_SPACING / 2.0;

/// Number of layers along each edge (2 to 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSize(u8);

impl PuzzleSize {
    /// Smallest supported size.
    pub const MIN: u8 = 2;
    /// Largest supported size.
    pub const MAX: u8 = 5;

    /// Validate a size.
    ///
    /// # Errors
    ///
    /// [`TurnError::InvalidPuzzleSize`] outside `MIN..=MAX`.
    pub fn new(size: u8) -> Result<Self, TurnError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(TurnError::InvalidPuzzleSize(size))
        }
    }

    /// Layers per edge.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Factor mapping assembly-frame piece coordinates to layer indices.
    #[must_use]
    pub fn quantization_scalar(self) -> f32 {
        match self.0 {
            2 => 6.0,
            4 => 4.0,
            _ => 3.0,
        }
    }

    /// Layer indices of an assembly-frame position.
    #[must_use]
    pub fn quantize(self, position: Vec3) -> IVec3 {
        (position * self.quantization_scalar()).round().as_ivec3()
    }

    /// Layer indices along one axis, lowest first.
    #[must_use]
    pub fn layer_indices(self) -> Vec<i32> {
        let n = i32::from(self.0);
        let center = (n - 1) as f32 / 2.0;
        (0..n)
            .map(|i| {
                ((i as f32 - center) * PIECE_SPACING * self.quantization_scalar())
                    .round() as i32
            })
            .collect()
    }

    /// Half the edge length of the whole puzzle.
    #[must_use]
    pub fn half_extent(self) -> f32 {
        f32::from(self.0) * PIECE_SPACING / 2.0
    }
}

impl Default for PuzzleSize {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for PuzzleSize {
    type Error = TurnError;

    fn try_from(size: u8) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

/// Stable piece identifier (index into [`Cube::pieces`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub usize);

/// Parent a piece is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// The whole puzzle.
    Assembly,
    /// The layer group currently being turned.
    Layer,
}

/// Face a sticker belonged to on the solved puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// +Y.
    Up,
    /// -Y.
    Down,
    /// -X.
    Left,
    /// +X.
    Right,
    /// +Z.
    Front,
    /// -Z.
    Back,
}

impl Face {
    /// Face an outward axis-aligned direction points through.
    #[must_use]
    pub fn from_direction(direction: Vec3) -> Self {
        let axis = Axis::dominant(direction);
        let positive = axis.component(direction) > 0.0;
        match (axis, positive) {
            (Axis::X, true) => Self::Right,
            (Axis::X, false) => Self::Left,
            (Axis::Y, true) => Self::Up,
            (Axis::Y, false) => Self::Down,
            (Axis::Z, true) => Self::Front,
            (Axis::Z, false) => Self::Back,
        }
    }
}

/// One puzzle piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    /// Identifier.
    pub id: PieceId,
    /// Display name, derived from the piece's solved grid cell.
    pub name: String,
    /// Current parent.
    pub container: Container,
    /// Transform relative to the parent.
    pub local: Pose,
}

/// A sticker reference point used to evaluate faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Piece the marker rides on.
    pub piece: PieceId,
    /// Offset in the piece's frame.
    pub offset: Vec3,
    /// Face this sticker started on.
    pub face: Face,
}

/// The puzzle: pieces, the assembly and layer containers, and markers.
#[derive(Debug, Clone)]
pub struct Cube {
    size: PuzzleSize,
    /// World pose of the assembly.
    assembly: Pose,
    /// Pose of the layer group relative to the assembly.
    layer: Pose,
    pieces: Vec<Piece>,
    markers: Vec<Marker>,
}

impl Cube {
    /// Solved puzzle of the given size, centered on the origin.
    #[must_use]
    pub fn new(size: PuzzleSize) -> Self {
        let n = i32::from(size.get());
        let center = (n - 1) as f32 / 2.0;
        let mut pieces = Vec::new();
        let mut markers = Vec::new();

        for x in 0..n {
            for y in 0..n {
                for z in 0..n {
                    let id = PieceId(pieces.len());
                    let cell = IVec3::new(x, y, z);
                    let position = (cell.as_vec3() - center) * PIECE_SPACING;
                    for axis in Axis::ALL {
                        let i = axis.component(cell.as_vec3()) as i32;
                        for (edge, sign) in [(0, -1.0), (n - 1, 1.0)] {
                            if i == edge {
                                let normal = axis.unit() * sign;
                                markers.push(Marker {
                                    piece: id,
                                    offset: normal * (PIECE_SPACING / 2.0),
                                    face: Face::from_direction(normal),
                                });
                            }
                        }
                    }
                    pieces.push(Piece {
                        id,
                        name: format!("{x}{y}{z}"),
                        container: Container::Assembly,
                        local: Pose::from_translation(position),
                    });
                }
            }
        }

        Self {
            size,
            assembly: Pose::IDENTITY,
            layer: Pose::IDENTITY,
            pieces,
            markers,
        }
    }

    /// Layers per edge.
    #[must_use]
    pub fn size(&self) -> PuzzleSize {
        self.size
    }

    /// All pieces, indexed by [`PieceId`].
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Look up a piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// All sticker markers.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// World pose of the assembly.
    #[must_use]
    pub fn assembly(&self) -> &Pose {
        &self.assembly
    }

    /// World pose of a container.
    #[must_use]
    pub fn container_world(&self, container: Container) -> Pose {
        match container {
            Container::Assembly => self.assembly,
            Container::Layer => self.assembly.mul_pose(&self.layer),
        }
    }

    /// World pose of a piece.
    #[must_use]
    pub fn piece_world(&self, id: PieceId) -> Option<Pose> {
        self.piece(id).map(|p| {
            self.container_world(p.container).mul_pose(&p.local)
        })
    }

    /// Pose of a piece in the assembly frame, wherever it is attached.
    #[must_use]
    pub fn piece_in_assembly(&self, id: PieceId) -> Option<Pose> {
        self.piece(id).map(|p| match p.container {
            Container::Assembly => p.local,
            Container::Layer => self.layer.mul_pose(&p.local),
        })
    }

    /// Turn the layer group about an assembly-frame axis.
    pub fn rotate_layer(&mut self, axis: Vec3, angle: f32) {
        self.layer.rotate_local(axis, angle);
    }

    /// Turn the whole assembly about a world axis.
    pub fn rotate_assembly_world(&mut self, axis: Vec3, angle: f32) {
        self.assembly.rotate_parent(axis, angle);
    }

    /// Turn the whole assembly about one of its own axes.
    pub fn rotate_assembly_local(&mut self, axis: Vec3, angle: f32) {
        self.assembly.rotate_local(axis, angle);
    }

    /// Reattach pieces from one container to another, keeping their world
    /// transform: the piece's local pose is carried to world by `from`, then
    /// back down by the inverse of `to`.
    ///
    /// Pieces not currently in `from` are left alone.
    pub fn move_pieces(&mut self, ids: &[PieceId], from: Container, to: Container) {
        let from_world = self.container_world(from);
        let to_inverse = self.container_world(to).inverse();
        for id in ids {
            let Some(piece) = self.pieces.get_mut(id.0) else {
                log::warn!("move_pieces: unknown piece {}", id.0);
                continue;
            };
            if piece.container != from {
                log::warn!(
                    "move_pieces: piece {} is in {:?}, not {from:?}",
                    piece.name,
                    piece.container
                );
                continue;
            }
            let world = from_world.mul_pose(&piece.local);
            piece.local = to_inverse.mul_pose(&world);
            piece.container = to;
        }
    }

    /// Pieces currently attached to the layer group.
    #[must_use]
    pub fn selected_layer(&self) -> Vec<PieceId> {
        self.pieces
            .iter()
            .filter(|p| p.container == Container::Layer)
            .map(|p| p.id)
            .collect()
    }

    /// Reset the layer group and attach `ids` to it.
    pub fn select_layer(&mut self, ids: &[PieceId]) {
        self.layer = Pose::IDENTITY;
        self.move_pieces(ids, Container::Assembly, Container::Layer);
    }

    /// Return every layer-group piece to the assembly, snapping each to its
    /// nearest grid cell and quarter-turn orientation.
    pub fn deselect_layer(&mut self) {
        let ids = self.selected_layer();
        self.move_pieces(&ids, Container::Layer, Container::Assembly);
        for id in ids {
            if let Some(piece) = self.pieces.get_mut(id.0) {
                piece.local.snap(SETTLE_GRID);
            }
        }
        self.layer = Pose::IDENTITY;
    }

    /// Snap the assembly and layer-group orientations to exact quarter turns.
    pub fn snap_containers(&mut self) {
        self.assembly.rotation = snap_rotation(self.assembly.rotation);
        self.layer.rotation = snap_rotation(self.layer.rotation);
    }

    /// Snap everything and return the layer group's pieces to the assembly.
    pub fn settle(&mut self) {
        self.snap_containers();
        self.deselect_layer();
    }

    /// Whether no layer is detached from the assembly.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pieces.iter().all(|p| p.container == Container::Assembly)
    }

    /// Intersect the assembly's bounding box (the edge hit-proxy).
    ///
    /// The hit point and axis-aligned normal are in the assembly frame.
    #[must_use]
    pub fn intersect_edges(&self, ray: &Ray) -> Option<RayHit> {
        ray.to_local(&self.assembly)
            .intersect_box(Vec3::splat(self.size.half_extent()))
    }

    /// Nearest piece hit by `ray`, with the hit in that piece's frame.
    #[must_use]
    pub fn intersect_pieces(&self, ray: &Ray) -> Option<(PieceId, RayHit)> {
        let half = Vec3::splat(PIECE_SPACING / 2.0);
        self.pieces
            .iter()
            .filter_map(|p| {
                let world = self.piece_world(p.id)?;
                ray.to_local(&world).intersect_box(half).map(|hit| (p.id, hit))
            })
            .min_by(|a, b| a.1.t.total_cmp(&b.1.t))
    }

    /// Every marker's face and world position relative to the assembly
    /// center.
    #[must_use]
    pub fn marker_positions(&self) -> Vec<(Face, Vec3)> {
        self.markers
            .iter()
            .filter_map(|m| {
                let world = self.piece_world(m.piece)?;
                Some((
                    m.face,
                    world.transform_point(m.offset) - self.assembly.translation,
                ))
            })
            .collect()
    }

    /// Whether every face shows a single color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        solved::is_solved(self.marker_positions())
    }
}
