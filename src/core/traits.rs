//! Core linear-algebra traits for stationary.

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Vector norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

/// Shape of a two-dimensional operator.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}

/// Entry access `A[i][j]`, used by the row-wise sweeps.
pub trait MatrixGet<T> {
    fn get(&self, i: usize, j: usize) -> T;
}
