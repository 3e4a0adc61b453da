// Copyright (c) 2024 The EnokCalc Developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): The EnokCalc Developers

// -----------------------------------------------------------------------------------
// Scalar utilities
// -----------------------------------------------------------------------------------

use num::{Float, Zero};

/// Valor mínimo para denominadores (COP, rendimientos...)
pub const EPSILON: f64 = 1e-6;

// Limit value to the closed interval [lo, hi]
pub fn clamp<T: Float>(value: T, lo: T, hi: T) -> T {
    value.max(lo).min(hi)
}

// Negative values are floored to zero
pub fn floor_zero<T: Float>(value: T) -> T {
    value.max(Zero::zero())
}

// Positive difference res = max(a - b, 0)
pub fn posdif<T: Float>(a: T, b: T) -> T {
    floor_zero(a - b)
}

// Floor a denominator away from zero
pub fn floor_eps<T: Float>(value: T, eps: T) -> T {
    value.max(eps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numops_clamp() {
        assert_eq!(24.0, clamp(30.0, 0.0, 24.0));
        assert_eq!(0.0, clamp(-1.0, 0.0, 24.0));
        assert_eq!(8.0, clamp(8.0, 0.0, 24.0));
    }

    #[test]
    fn numops_floor_zero() {
        assert_eq!(0.0, floor_zero(-3.5));
        assert_eq!(3.5, floor_zero(3.5));
    }

    #[test]
    fn numops_posdif() {
        assert_eq!(0.0, posdif(0.18, 0.30));
        assert_eq!(0.5, posdif(1.5, 1.0));
    }

    #[test]
    fn numops_floor_eps() {
        assert_eq!(EPSILON, floor_eps(0.0, EPSILON));
        assert_eq!(3.2, floor_eps(3.2, EPSILON));
    }
}
