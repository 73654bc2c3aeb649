/*

    Declare numeric types used throughout this repo.

    WARNING: If you like to use f32 instead of f64
    during computations, you need to change both of these:
    pub type Float = f32;
    pub type Vector3 = Vec3;

    @date: 21 Nov, 2025
    @author: bartu
*/

use bevy_math::DVec3;

pub type Float = f64; // WARNING: If you want to change it to f32, don't forget to update Vector3 type
pub type Vector3 = DVec3;

pub fn approx_zero(x: Float) -> bool {
    x.abs() < 1e-8
}
