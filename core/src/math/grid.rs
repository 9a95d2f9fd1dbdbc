use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Helpers for building and reducing rectangular sample grids.
pub struct GridHelper;

impl GridHelper {
    /// Evenly spaced samples over `[start, end]`, both ends included.
    pub fn linspace(start: f64, end: f64, samples: usize) -> Array1<f64> {
        Array1::linspace(start, end, samples)
    }

    /// Builds `(outer, inner)` meshes with one row per `outer` sample and one
    /// column per `inner` sample.
    pub fn meshgrid(inner: ArrayView1<f64>, outer: ArrayView1<f64>) -> (Array2<f64>, Array2<f64>) {
        let shape = (outer.len(), inner.len());
        let inner_mesh = Array2::from_shape_fn(shape, |(_, col)| inner[col]);
        let outer_mesh = Array2::from_shape_fn(shape, |(row, _)| outer[row]);
        (inner_mesh, outer_mesh)
    }

    /// Largest sample, or `None` for an empty grid.
    pub fn peak(values: ArrayView2<f64>) -> Option<f64> {
        values.iter().copied().fold(None, |acc, v| match acc {
            Some(best) if best >= v => Some(best),
            _ => Some(v),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn linspace_includes_both_ends() {
        let samples = GridHelper::linspace(0.0, 1.0, 5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[4], 1.0);
    }

    #[test]
    fn meshgrid_lays_outer_samples_along_rows() {
        let inner = array![1.0, 2.0, 3.0];
        let outer = array![10.0, 20.0];
        let (inner_mesh, outer_mesh) = GridHelper::meshgrid(inner.view(), outer.view());
        assert_eq!(inner_mesh.dim(), (2, 3));
        assert_eq!(inner_mesh[[1, 2]], 3.0);
        assert_eq!(outer_mesh[[1, 2]], 20.0);
    }

    #[test]
    fn peak_of_empty_grid_is_none() {
        let empty = Array2::<f64>::zeros((0, 3));
        assert_eq!(GridHelper::peak(empty.view()), None);
        let values = array![[0.5, 2.0], [1.5, -1.0]];
        assert_eq!(GridHelper::peak(values.view()), Some(2.0));
    }
}
