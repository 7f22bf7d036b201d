//! Public entry points: validate, convert, dispatch, scale.

use log::{debug, trace};

use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::driver;
use crate::engine::EngineSelector;
use crate::error::TesseroidError;
use crate::kernel::Field;
use crate::model::TesseroidModel;
use crate::parallel::run_chunked;
use crate::point::convert_points;

/// Per-call configuration. `ratio` defaults to the field-specific value
/// from when left at `None`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineOptions {
    pub ratio: Option<f64>,
    pub engine: EngineSelector,
    pub njobs: usize,
    pub stack_limit: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            ratio: None,
            engine: EngineSelector::Default,
            njobs: 1,
            stack_limit: crate::constants::DEFAULT_STACK_SIZE,
        }
    }
}

fn validate(
    lon: &[f64],
    lat: &[f64],
    height: &[f64],
    options: &EngineOptions,
) -> Result<(), TesseroidError> {
    if lon.len() != lat.len() || lon.len() != height.len() {
        return Err(TesseroidError::ShapeMismatch {
            lon: lon.len(),
            lat: lat.len(),
            height: height.len(),
        });
    }
    if let Some(ratio) = options.ratio {
        if !(ratio > 0.0) {
            return Err(TesseroidError::InvalidParameter(format!(
                "ratio must be > 0, got {ratio}"
            )));
        }
    }
    if options.njobs == 0 {
        return Err(TesseroidError::InvalidParameter(
            "njobs must be >= 1".to_string(),
        ));
    }
    if options.stack_limit == 0 {
        return Err(TesseroidError::InvalidParameter(
            "stack_limit must be >= 1".to_string(),
        ));
    }
    Ok(())
}

/// Shared implementation behind all ten public field functions. The
/// engine selector is accepted but, per `EngineSelector`'s own doc
/// comment, does not currently change the compute path.
fn compute_field(
    field: Field,
    lon: &[f64],
    lat: &[f64],
    height: &[f64],
    model: &TesseroidModel,
    density: Option<f64>,
    options: EngineOptions,
) -> Result<Vec<f64>, TesseroidError> {
    validate(lon, lat, height, &options)?;

    let ratio = options.ratio.unwrap_or_else(|| field.default_ratio());
    let points = convert_points(lon, lat, height);
    let bodies: Vec<_> = model.resolved(density).collect();
    let skipped = model.element_count() - bodies.len();
    if skipped > 0 {
        debug!("{skipped} model entries skipped (null or unresolved density)");
    }

    // `driver::accumulate` only ever sees the chunk `run_chunked` hands it,
    // so the `point_index` passed in here is relative to that chunk, not
    // the caller's original array. The absolute index used in the errors
    // returned below comes entirely from `outputs.into_iter().enumerate()`
    // over the flattened, chunk-order-preserving result, not from this value.
    let worker = |chunk: &[crate::point::ObservationPoint]| -> Vec<Result<f64, TesseroidError>> {
        chunk
            .iter()
            .enumerate()
            .map(|(chunk_index, point)| {
                let mut total = 0.0f64;
                for (tesseroid, density) in bodies.iter() {
                    let contribution = driver::accumulate(
                        field,
                        tesseroid,
                        point,
                        ratio,
                        options.stack_limit,
                        chunk_index,
                    )?;
                    total += contribution * density;
                }
                Ok(total)
            })
            .collect()
    };
    let outputs: Vec<Result<f64, TesseroidError>> = run_chunked(&points, options.njobs, worker);

    let mut result = Vec::with_capacity(outputs.len());
    for (idx, outcome) in outputs.into_iter().enumerate() {
        match outcome {
            Ok(value) => result.push(value),
            Err(TesseroidError::StackOverflow { .. }) => {
                trace!("stack overflow at point {idx}");
                return Err(TesseroidError::StackOverflow { point_index: idx });
            }
            Err(TesseroidError::PointInsideTesseroid { .. }) => {
                return Err(TesseroidError::PointInsideTesseroid { point_index: idx });
            }
            Err(other) => return Err(other),
        }
    }

    let unit_factor = field.unit_factor();
    for value in result.iter_mut() {
        *value *= GRAVITATIONAL_CONSTANT * unit_factor;
    }
    Ok(result)
}

macro_rules! field_fn {
    ($name:ident, $field:expr) => {
        #[doc = concat!("Compute `", stringify!($name), "` at the given observation points.")]
        pub fn $name(
            lon: &[f64],
            lat: &[f64],
            height: &[f64],
            model: &TesseroidModel,
            density: Option<f64>,
            options: EngineOptions,
        ) -> Result<Vec<f64>, TesseroidError> {
            compute_field($field, lon, lat, height, model, density, options)
        }
    };
}

field_fn!(potential, Field::V);
field_fn!(gx, Field::Gx);
field_fn!(gy, Field::Gy);
field_fn!(gz, Field::Gz);
field_fn!(gxx, Field::Gxx);
field_fn!(gxy, Field::Gxy);
field_fn!(gxz, Field::Gxz);
field_fn!(gyy, Field::Gyy);
field_fn!(gyz, Field::Gyz);
field_fn!(gzz, Field::Gzz);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MEAN_EARTH_RADIUS;
    use crate::model::Tesseroid;

    fn sample_model() -> TesseroidModel {
        let t = Tesseroid::new(
            -0.5f64.to_radians(),
            0.5f64.to_radians(),
            -0.5f64.to_radians(),
            0.5f64.to_radians(),
            MEAN_EARTH_RADIUS - 10_000.0,
            MEAN_EARTH_RADIUS,
            Some(2670.0),
        )
        .unwrap();
        TesseroidModel::from(vec![t])
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let model = sample_model();
        let result = potential(&[0.0, 1.0], &[0.0], &[0.0], &model, None, EngineOptions::default());
        assert!(matches!(result, Err(TesseroidError::ShapeMismatch { .. })));
    }

    #[test]
    fn zero_njobs_is_rejected() {
        let model = sample_model();
        let options = EngineOptions {
            njobs: 0,
            ..EngineOptions::default()
        };
        let result = potential(&[0.0], &[0.0], &[250_000.0], &model, None, options);
        assert!(matches!(result, Err(TesseroidError::InvalidParameter(_))));
    }

    #[test]
    fn potential_is_positive_above_a_dense_body() {
        let model = sample_model();
        let result = potential(&[0.0], &[0.0], &[250_000.0], &model, None, EngineOptions::default())
            .unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0] > 0.0);
    }

    #[test]
    fn njobs_does_not_change_the_result() {
        let model = sample_model();
        let lon = vec![0.0, 0.1, 0.2, -0.1];
        let lat = vec![0.0, 0.1, -0.1, 0.2];
        let height = vec![250_000.0, 260_000.0, 240_000.0, 255_000.0];

        let serial = gz(&lon, &lat, &height, &model, None, EngineOptions::default()).unwrap();
        let parallel_options = EngineOptions {
            njobs: 4,
            ..EngineOptions::default()
        };
        let parallel = gz(&lon, &lat, &height, &model, None, parallel_options).unwrap();

        assert_eq!(serial, parallel);
    }
}
