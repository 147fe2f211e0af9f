/// Area of a `height` by `width` rectangle.
///
/// Computed in `f32`. Inputs are not validated, so negative or non-finite
/// dimensions produce whatever the multiplication yields.
pub fn area(height: f32, width: f32) -> f32 {
    height * width
}
