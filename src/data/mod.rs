/// Data layer: the spectrum type and its loader.
///
/// Architecture:
/// ```text
///  misc/arrays.dat
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Spectrum
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Spectrum  │  wavelengths, power
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
