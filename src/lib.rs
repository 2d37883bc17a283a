#![doc = r#"
DRINDEX — remote-sensing drought indices over labeled time-series rasters.

This crate computes the standard satellite-derived drought indices — VCI, TCI,
VHI, AVI, NDVI and SAVI — from in-memory labeled arrays, and provides a helper
to attach calendar time coordinates to raster stacks. It is a pure numeric
core: reading rasters, reprojection, plotting and orchestration belong to the
caller.

Quick start: label a stack, then index it
-----------------------------------------
```rust
use ndarray::{ArrayD, IxDyn};
use drindex::{LabeledArray, time_dimension, vci};

fn main() -> drindex::Result<()> {
    // 24 monthly NDVI composites on a 3x4 grid, leading axis = acquisition.
    let raw = ArrayD::<f64>::zeros(IxDyn(&[24, 3, 4]));
    let stack = LabeledArray::new(raw, ["band", "y", "x"])?;

    // Stamp the acquisitions monthly from 2018-01-01 and rename band -> time.
    let stack = time_dimension(stack, Some("2018-01-01"), Some("month"), None, None)?;

    // VCI against the monthly multi-year baseline; same shape and labels out.
    let index = vci(&stack, Some("time"), Some("month"))?;
    assert_eq!(index.shape(), stack.shape());
    Ok(())
}
```

Single-scene band math
----------------------
```rust
use ndarray::array;
use drindex::{ndvi, savi};

fn main() -> drindex::Result<()> {
    let red = array![[0.2, 0.3], [0.1, 0.2]];
    let nir = array![[0.6, 0.6], [0.5, 0.4]];

    let v = ndvi(&red, &nir)?;
    let s = savi(&nir, &red, None)?; // soil factor defaults to 0.5
    assert_eq!(v.dim(), s.dim());
    Ok(())
}
```

Blending condition indices
--------------------------
```rust,no_run
use drindex::{vhi, LabeledArray};

fn blend(vci: &LabeledArray, tci: &LabeledArray) -> drindex::Result<LabeledArray> {
    // Equal weight to vegetation and thermal stress.
    vhi(vci, tci, 0.5)
}
```

Error handling
--------------
All public functions return `drindex::Result<T>`; match on `drindex::Error`
for specific cases, e.g. an unsupported frequency token or a shape mismatch.

```rust
use drindex::{Error, Frequency};

match "week".parse::<Frequency>() {
    Ok(_) => unreachable!(),
    Err(Error::UnsupportedFrequency { token }) => assert_eq!(token, "week"),
    Err(other) => panic!("unexpected: {other}"),
}
```

Useful modules
--------------
- [`core::indices`] — the index calculations (`vci`, `tci`, `avi`, `vhi`,
  `ndvi`, `savi`).
- [`core::array`] — `LabeledArray` and the `NumericArray` capability.
- [`core::timeline`] — `time_dimension` and date parsing.
- [`types`] — the `Frequency` granularity enum.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::array::{LabeledArray, NumericArray};
pub use crate::core::indices::{SAVI_SOIL_FACTOR, avi, ndvi, savi, tci, vci, vhi};
pub use crate::core::timeline::{parse_date, time_dimension};
pub use crate::error::{Error, Result};
pub use crate::types::Frequency;

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
