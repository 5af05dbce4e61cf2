pub mod hole_data;

pub use hole_data::{
    HoleDataRecord, HoleRecord, PolygonRecord, VectorRecord, load_hole_data, parse_hole_data,
};
