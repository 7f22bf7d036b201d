//! The tesseroid data container and model sequence.

use crate::error::TesseroidError;

/// An axis-aligned box in spherical coordinates: two meridians, two
/// parallels, two concentric spheres. Shared by [`Tesseroid`] and the
/// subdivision stack's sub-tesseroid elements.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// West longitude, radians, in `(-pi, pi]`.
    pub w: f64,
    /// East longitude, radians, in `(-pi, pi]`.
    pub e: f64,
    /// South latitude, radians, in `[-pi/2, pi/2]`.
    pub s: f64,
    /// North latitude, radians, in `[-pi/2, pi/2]`.
    pub n: f64,
    /// Bottom radius, metres.
    pub bottom: f64,
    /// Top radius, metres.
    pub top: f64,
}

impl Bounds {
    fn validate(self) -> Result<Self, TesseroidError> {
        if !(self.w < self.e) {
            return Err(TesseroidError::InvalidTesseroid(format!(
                "west bound {} must be < east bound {}",
                self.w, self.e
            )));
        }
        if !(self.s < self.n) {
            return Err(TesseroidError::InvalidTesseroid(format!(
                "south bound {} must be < north bound {}",
                self.s, self.n
            )));
        }
        if !(0.0 < self.bottom && self.bottom < self.top) {
            return Err(TesseroidError::InvalidTesseroid(format!(
                "radii must satisfy 0 < bottom ({}) < top ({})",
                self.bottom, self.top
            )));
        }
        Ok(self)
    }

    /// True if the point `(lon, lat, radius)` lies strictly inside these bounds.
    pub fn contains(&self, lon: f64, lat: f64, radius: f64) -> bool {
        lon > self.w
            && lon < self.e
            && lat > self.s
            && lat < self.n
            && radius > self.bottom
            && radius < self.top
    }
}

/// A spherical-prism mass element with an intrinsic density.
///
/// Bounds are validated at construction: west < east, south < north,
/// `0 < bottom < top`, all in radians/metres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tesseroid {
    pub bounds: Bounds,
    /// Intrinsic density in kg/m^3. `None` means the tesseroid contributes
    /// nothing unless the caller supplies a density override.
    pub density: Option<f64>,
}

impl Tesseroid {
    /// Build a tesseroid from explicit bounds (radians, metres) and an
    /// optional intrinsic density.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        w: f64,
        e: f64,
        s: f64,
        n: f64,
        bottom: f64,
        top: f64,
        density: Option<f64>,
    ) -> Result<Self, TesseroidError> {
        if let Some(d) = density {
            if !d.is_finite() {
                return Err(TesseroidError::InvalidTesseroid(format!(
                    "density must be finite, got {d}"
                )));
            }
        }
        let bounds = Bounds {
            w,
            e,
            s,
            n,
            bottom,
            top,
        }
        .validate()?;
        Ok(Self { bounds, density })
    }

    /// Resolve the density to use for this tesseroid given an optional
    /// caller-supplied override: an explicit override always wins,
    /// otherwise fall back to the intrinsic density, otherwise `None`
    /// (meaning "skip").
    pub fn effective_density(&self, override_density: Option<f64>) -> Option<f64> {
        override_density.or(self.density)
    }
}

/// One entry in a tesseroid model: either a body or an explicit gap.
///
/// Models are heterogeneous sequences where some positions may simply be
/// absent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModelElement {
    Body(Tesseroid),
    Null,
}

/// An ordered sequence of tesseroids (and gaps) making up a density model.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TesseroidModel {
    elements: Vec<ModelElement>,
}

impl TesseroidModel {
    pub fn new(elements: Vec<ModelElement>) -> Self {
        Self { elements }
    }

    /// Total number of entries, including `Null` gaps.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Iterate over the tesseroids that have a resolvable density for the
    /// given override, skipping `Null` entries and unresolved-density
    /// bodies silently.
    pub fn resolved(
        &self,
        override_density: Option<f64>,
    ) -> impl Iterator<Item = (Tesseroid, f64)> + '_ {
        self.elements.iter().filter_map(move |element| match element {
            ModelElement::Body(t) => t
                .effective_density(override_density)
                .map(|density| (*t, density)),
            ModelElement::Null => None,
        })
    }
}

impl FromIterator<ModelElement> for TesseroidModel {
    fn from_iter<I: IntoIterator<Item = ModelElement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Tesseroid>> for TesseroidModel {
    fn from(bodies: Vec<Tesseroid>) -> Self {
        Self::new(bodies.into_iter().map(ModelElement::Body).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unordered_bounds() {
        let err = Tesseroid::new(0.1, 0.0, -0.1, 0.1, 1.0, 2.0, Some(2670.0));
        assert!(err.is_err());
    }

    #[test]
    fn rejects_non_positive_radii() {
        let err = Tesseroid::new(-0.1, 0.1, -0.1, 0.1, 0.0, 2.0, Some(2670.0));
        assert!(err.is_err());
    }

    #[test]
    fn override_density_wins_over_intrinsic() {
        let t = Tesseroid::new(-0.1, 0.1, -0.1, 0.1, 1.0, 2.0, Some(2670.0)).unwrap();
        assert_eq!(t.effective_density(Some(1000.0)), Some(1000.0));
        assert_eq!(t.effective_density(None), Some(2670.0));
    }

    #[test]
    fn body_without_density_and_no_override_skips() {
        let t = Tesseroid::new(-0.1, 0.1, -0.1, 0.1, 1.0, 2.0, None).unwrap();
        assert_eq!(t.effective_density(None), None);
    }

    #[test]
    fn null_entries_are_skipped_in_resolved() {
        let t = Tesseroid::new(-0.1, 0.1, -0.1, 0.1, 1.0, 2.0, Some(2670.0)).unwrap();
        let model = TesseroidModel::new(vec![ModelElement::Body(t), ModelElement::Null]);
        let resolved: Vec<_> = model.resolved(None).collect();
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn contains_detects_interior_point() {
        let b = Bounds {
            w: -0.1,
            e: 0.1,
            s: -0.1,
            n: 0.1,
            bottom: 1.0,
            top: 2.0,
        };
        assert!(b.contains(0.0, 0.0, 1.5));
        assert!(!b.contains(0.0, 0.0, 2.5));
        assert!(!b.contains(0.0, 0.0, 1.0)); // boundary is not "inside"
    }
}
