/// Interpolation axis of a gradient request.
///
/// The sector variants interpolate across the request's region instead of
/// the whole viewport, which is what scripted sky/ambient effects use.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GradientDirection {
    Horizontal,
    Vertical,
    HorizontalSector,
    VerticalSector,
}
