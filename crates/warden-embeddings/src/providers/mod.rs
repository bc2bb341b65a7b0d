mod api_provider;
mod hashed_encoder;
mod onnx_provider;

pub use api_provider::ApiProvider;
pub use hashed_encoder::HashedEncoder;
pub use onnx_provider::OnnxProvider;

/// L2-normalise in place. Zero vectors are left untouched.
pub(crate) fn l2_normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}
