//! Control points of the classic Utah teapot.
//!
//! 32 bicubic patches, 16 points each, stored row by row. Units are the
//! unscaled teapot which fits roughly inside a unit cube.

pub(super) const PATCH_COUNT: usize = 32;

pub(super) const PATCHES: [[[f64; 3]; 16]; PATCH_COUNT] = [
    [
        [0.280, 0.465, 0.000],
        [0.280, 0.465, -0.157],
        [0.157, 0.465, -0.280],
        [0.000, 0.465, -0.280],
        [0.268, 0.491, 0.000],
        [0.268, 0.491, -0.150],
        [0.150, 0.491, -0.268],
        [0.000, 0.491, -0.268],
        [0.288, 0.491, 0.000],
        [0.288, 0.491, -0.161],
        [0.161, 0.491, -0.288],
        [0.000, 0.491, -0.288],
        [0.300, 0.465, 0.000],
        [0.300, 0.465, -0.168],
        [0.168, 0.465, -0.300],
        [0.000, 0.465, -0.300],
    ],
    [
        [0.000, 0.465, -0.280],
        [-0.157, 0.465, -0.280],
        [-0.280, 0.465, -0.157],
        [-0.280, 0.465, 0.000],
        [0.000, 0.491, -0.268],
        [-0.150, 0.491, -0.268],
        [-0.268, 0.491, -0.150],
        [-0.268, 0.491, 0.000],
        [0.000, 0.491, -0.288],
        [-0.161, 0.491, -0.288],
        [-0.288, 0.491, -0.161],
        [-0.288, 0.491, 0.000],
        [0.000, 0.465, -0.300],
        [-0.168, 0.465, -0.300],
        [-0.300, 0.465, -0.168],
        [-0.300, 0.465, 0.000],
    ],
    [
        [-0.280, 0.465, 0.000],
        [-0.280, 0.465, 0.157],
        [-0.157, 0.465, 0.280],
        [0.000, 0.465, 0.280],
        [-0.268, 0.491, 0.000],
        [-0.268, 0.491, 0.150],
        [-0.150, 0.491, 0.268],
        [0.000, 0.491, 0.268],
        [-0.288, 0.491, 0.000],
        [-0.288, 0.491, 0.161],
        [-0.161, 0.491, 0.288],
        [0.000, 0.491, 0.288],
        [-0.300, 0.465, 0.000],
        [-0.300, 0.465, 0.168],
        [-0.168, 0.465, 0.300],
        [0.000, 0.465, 0.300],
    ],
    [
        [0.000, 0.465, 0.280],
        [0.157, 0.465, 0.280],
        [0.280, 0.465, 0.157],
        [0.280, 0.465, 0.000],
        [0.000, 0.491, 0.268],
        [0.150, 0.491, 0.268],
        [0.268, 0.491, 0.150],
        [0.268, 0.491, 0.000],
        [0.000, 0.491, 0.288],
        [0.161, 0.491, 0.288],
        [0.288, 0.491, 0.161],
        [0.288, 0.491, 0.000],
        [0.000, 0.465, 0.300],
        [0.168, 0.465, 0.300],
        [0.300, 0.465, 0.168],
        [0.300, 0.465, 0.000],
    ],
    [
        [0.300, 0.465, 0.000],
        [0.300, 0.465, -0.168],
        [0.168, 0.465, -0.300],
        [0.000, 0.465, -0.300],
        [0.350, 0.360, 0.000],
        [0.350, 0.360, -0.196],
        [0.196, 0.360, -0.350],
        [0.000, 0.360, -0.350],
        [0.400, 0.255, 0.000],
        [0.400, 0.255, -0.224],
        [0.224, 0.255, -0.400],
        [0.000, 0.255, -0.400],
        [0.400, 0.165, 0.000],
        [0.400, 0.165, -0.224],
        [0.224, 0.165, -0.400],
        [0.000, 0.165, -0.400],
    ],
    [
        [0.000, 0.465, -0.300],
        [-0.168, 0.465, -0.300],
        [-0.300, 0.465, -0.168],
        [-0.300, 0.465, 0.000],
        [0.000, 0.360, -0.350],
        [-0.196, 0.360, -0.350],
        [-0.350, 0.360, -0.196],
        [-0.350, 0.360, 0.000],
        [0.000, 0.255, -0.400],
        [-0.224, 0.255, -0.400],
        [-0.400, 0.255, -0.224],
        [-0.400, 0.255, 0.000],
        [0.000, 0.165, -0.400],
        [-0.224, 0.165, -0.400],
        [-0.400, 0.165, -0.224],
        [-0.400, 0.165, 0.000],
    ],
    [
        [-0.300, 0.465, 0.000],
        [-0.300, 0.465, 0.168],
        [-0.168, 0.465, 0.300],
        [0.000, 0.465, 0.300],
        [-0.350, 0.360, 0.000],
        [-0.350, 0.360, 0.196],
        [-0.196, 0.360, 0.350],
        [0.000, 0.360, 0.350],
        [-0.400, 0.255, 0.000],
        [-0.400, 0.255, 0.224],
        [-0.224, 0.255, 0.400],
        [0.000, 0.255, 0.400],
        [-0.400, 0.165, 0.000],
        [-0.400, 0.165, 0.224],
        [-0.224, 0.165, 0.400],
        [0.000, 0.165, 0.400],
    ],
    [
        [0.000, 0.465, 0.300],
        [0.168, 0.465, 0.300],
        [0.300, 0.465, 0.168],
        [0.300, 0.465, 0.000],
        [0.000, 0.360, 0.350],
        [0.196, 0.360, 0.350],
        [0.350, 0.360, 0.196],
        [0.350, 0.360, 0.000],
        [0.000, 0.255, 0.400],
        [0.224, 0.255, 0.400],
        [0.400, 0.255, 0.224],
        [0.400, 0.255, 0.000],
        [0.000, 0.165, 0.400],
        [0.224, 0.165, 0.400],
        [0.400, 0.165, 0.224],
        [0.400, 0.165, 0.000],
    ],
    [
        [0.400, 0.165, 0.000],
        [0.400, 0.165, -0.224],
        [0.224, 0.165, -0.400],
        [0.000, 0.165, -0.400],
        [0.400, 0.075, 0.000],
        [0.400, 0.075, -0.224],
        [0.224, 0.075, -0.400],
        [0.000, 0.075, -0.400],
        [0.300, 0.030, 0.000],
        [0.300, 0.030, -0.168],
        [0.168, 0.030, -0.300],
        [0.000, 0.030, -0.300],
        [0.300, 0.015, 0.000],
        [0.300, 0.015, -0.168],
        [0.168, 0.015, -0.300],
        [0.000, 0.015, -0.300],
    ],
    [
        [0.000, 0.165, -0.400],
        [-0.224, 0.165, -0.400],
        [-0.400, 0.165, -0.224],
        [-0.400, 0.165, 0.000],
        [0.000, 0.075, -0.400],
        [-0.224, 0.075, -0.400],
        [-0.400, 0.075, -0.224],
        [-0.400, 0.075, 0.000],
        [0.000, 0.030, -0.300],
        [-0.168, 0.030, -0.300],
        [-0.300, 0.030, -0.168],
        [-0.300, 0.030, 0.000],
        [0.000, 0.015, -0.300],
        [-0.168, 0.015, -0.300],
        [-0.300, 0.015, -0.168],
        [-0.300, 0.015, 0.000],
    ],
    [
        [-0.400, 0.165, 0.000],
        [-0.400, 0.165, 0.224],
        [-0.224, 0.165, 0.400],
        [0.000, 0.165, 0.400],
        [-0.400, 0.075, 0.000],
        [-0.400, 0.075, 0.224],
        [-0.224, 0.075, 0.400],
        [0.000, 0.075, 0.400],
        [-0.300, 0.030, 0.000],
        [-0.300, 0.030, 0.168],
        [-0.168, 0.030, 0.300],
        [0.000, 0.030, 0.300],
        [-0.300, 0.015, 0.000],
        [-0.300, 0.015, 0.168],
        [-0.168, 0.015, 0.300],
        [0.000, 0.015, 0.300],
    ],
    [
        [0.000, 0.165, 0.400],
        [0.224, 0.165, 0.400],
        [0.400, 0.165, 0.224],
        [0.400, 0.165, 0.000],
        [0.000, 0.075, 0.400],
        [0.224, 0.075, 0.400],
        [0.400, 0.075, 0.224],
        [0.400, 0.075, 0.000],
        [0.000, 0.030, 0.300],
        [0.168, 0.030, 0.300],
        [0.300, 0.030, 0.168],
        [0.300, 0.030, 0.000],
        [0.000, 0.015, 0.300],
        [0.168, 0.015, 0.300],
        [0.300, 0.015, 0.168],
        [0.300, 0.015, 0.000],
    ],
    [
        [-0.320, 0.390, 0.000],
        [-0.320, 0.390, -0.060],
        [-0.300, 0.435, -0.060],
        [-0.300, 0.435, 0.000],
        [-0.460, 0.390, 0.000],
        [-0.460, 0.390, -0.060],
        [-0.500, 0.435, -0.060],
        [-0.500, 0.435, 0.000],
        [-0.540, 0.390, 0.000],
        [-0.540, 0.390, -0.060],
        [-0.600, 0.435, -0.060],
        [-0.600, 0.435, 0.000],
        [-0.540, 0.345, 0.000],
        [-0.540, 0.345, -0.060],
        [-0.600, 0.345, -0.060],
        [-0.600, 0.345, 0.000],
    ],
    [
        [-0.300, 0.435, 0.000],
        [-0.300, 0.435, 0.060],
        [-0.320, 0.390, 0.060],
        [-0.320, 0.390, 0.000],
        [-0.500, 0.435, 0.000],
        [-0.500, 0.435, 0.060],
        [-0.460, 0.390, 0.060],
        [-0.460, 0.390, 0.000],
        [-0.600, 0.435, 0.000],
        [-0.600, 0.435, 0.060],
        [-0.540, 0.390, 0.060],
        [-0.540, 0.390, 0.000],
        [-0.600, 0.345, 0.000],
        [-0.600, 0.345, 0.060],
        [-0.540, 0.345, 0.060],
        [-0.540, 0.345, 0.000],
    ],
    [
        [-0.540, 0.345, 0.000],
        [-0.540, 0.345, -0.060],
        [-0.600, 0.345, -0.060],
        [-0.600, 0.345, 0.000],
        [-0.540, 0.300, 0.000],
        [-0.540, 0.300, -0.060],
        [-0.600, 0.255, -0.060],
        [-0.600, 0.255, 0.000],
        [-0.500, 0.210, 0.000],
        [-0.500, 0.210, -0.060],
        [-0.530, 0.172, -0.060],
        [-0.530, 0.172, 0.000],
        [-0.400, 0.165, 0.000],
        [-0.400, 0.165, -0.060],
        [-0.380, 0.105, -0.060],
        [-0.380, 0.105, 0.000],
    ],
    [
        [-0.600, 0.345, 0.000],
        [-0.600, 0.345, 0.060],
        [-0.540, 0.345, 0.060],
        [-0.540, 0.345, 0.000],
        [-0.600, 0.255, 0.000],
        [-0.600, 0.255, 0.060],
        [-0.540, 0.300, 0.060],
        [-0.540, 0.300, 0.000],
        [-0.530, 0.172, 0.000],
        [-0.530, 0.172, 0.060],
        [-0.500, 0.210, 0.060],
        [-0.500, 0.210, 0.000],
        [-0.380, 0.105, 0.000],
        [-0.380, 0.105, 0.060],
        [-0.400, 0.165, 0.060],
        [-0.400, 0.165, 0.000],
    ],
    [
        [0.340, 0.270, 0.000],
        [0.340, 0.270, -0.132],
        [0.340, 0.105, -0.132],
        [0.340, 0.105, 0.000],
        [0.520, 0.270, 0.000],
        [0.520, 0.270, -0.132],
        [0.620, 0.150, -0.132],
        [0.620, 0.150, 0.000],
        [0.460, 0.405, 0.000],
        [0.460, 0.405, -0.050],
        [0.480, 0.390, -0.050],
        [0.480, 0.390, 0.000],
        [0.540, 0.465, 0.000],
        [0.540, 0.465, -0.050],
        [0.660, 0.465, -0.050],
        [0.660, 0.465, 0.000],
    ],
    [
        [0.340, 0.105, 0.000],
        [0.340, 0.105, 0.132],
        [0.340, 0.270, 0.132],
        [0.340, 0.270, 0.000],
        [0.620, 0.150, 0.000],
        [0.620, 0.150, 0.132],
        [0.520, 0.270, 0.132],
        [0.520, 0.270, 0.000],
        [0.480, 0.390, 0.000],
        [0.480, 0.390, 0.050],
        [0.460, 0.405, 0.050],
        [0.460, 0.405, 0.000],
        [0.660, 0.465, 0.000],
        [0.660, 0.465, 0.050],
        [0.540, 0.465, 0.050],
        [0.540, 0.465, 0.000],
    ],
    [
        [0.540, 0.465, 0.000],
        [0.540, 0.465, -0.050],
        [0.660, 0.465, -0.050],
        [0.660, 0.465, 0.000],
        [0.560, 0.480, 0.000],
        [0.560, 0.480, -0.050],
        [0.705, 0.484, -0.050],
        [0.705, 0.484, 0.000],
        [0.580, 0.480, 0.000],
        [0.580, 0.480, -0.030],
        [0.690, 0.488, -0.030],
        [0.690, 0.488, 0.000],
        [0.560, 0.465, 0.000],
        [0.560, 0.465, -0.030],
        [0.640, 0.465, -0.030],
        [0.640, 0.465, 0.000],
    ],
    [
        [0.660, 0.465, 0.000],
        [0.660, 0.465, 0.050],
        [0.540, 0.465, 0.050],
        [0.540, 0.465, 0.000],
        [0.705, 0.484, 0.000],
        [0.705, 0.484, 0.050],
        [0.560, 0.480, 0.050],
        [0.560, 0.480, 0.000],
        [0.690, 0.488, 0.000],
        [0.690, 0.488, 0.030],
        [0.580, 0.480, 0.030],
        [0.580, 0.480, 0.000],
        [0.640, 0.465, 0.000],
        [0.640, 0.465, 0.030],
        [0.560, 0.465, 0.030],
        [0.560, 0.465, 0.000],
    ],
    [
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.160, 0.615, 0.000],
        [0.160, 0.615, -0.090],
        [0.090, 0.615, -0.160],
        [0.000, 0.615, -0.160],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.040, 0.525, 0.000],
        [0.040, 0.525, -0.022],
        [0.022, 0.525, -0.040],
        [0.000, 0.525, -0.040],
    ],
    [
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.000, 0.615, -0.160],
        [-0.090, 0.615, -0.160],
        [-0.160, 0.615, -0.090],
        [-0.160, 0.615, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.525, -0.040],
        [-0.022, 0.525, -0.040],
        [-0.040, 0.525, -0.022],
        [-0.040, 0.525, 0.000],
    ],
    [
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [-0.160, 0.615, 0.000],
        [-0.160, 0.615, 0.090],
        [-0.090, 0.615, 0.160],
        [0.000, 0.615, 0.160],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [-0.040, 0.525, 0.000],
        [-0.040, 0.525, 0.022],
        [-0.022, 0.525, 0.040],
        [0.000, 0.525, 0.040],
    ],
    [
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.000],
        [0.000, 0.615, 0.160],
        [0.090, 0.615, 0.160],
        [0.160, 0.615, 0.090],
        [0.160, 0.615, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.555, 0.000],
        [0.000, 0.525, 0.040],
        [0.022, 0.525, 0.040],
        [0.040, 0.525, 0.022],
        [0.040, 0.525, 0.000],
    ],
    [
        [0.040, 0.525, 0.000],
        [0.040, 0.525, -0.022],
        [0.022, 0.525, -0.040],
        [0.000, 0.525, -0.040],
        [0.080, 0.495, 0.000],
        [0.080, 0.495, -0.045],
        [0.045, 0.495, -0.080],
        [0.000, 0.495, -0.080],
        [0.260, 0.495, 0.000],
        [0.260, 0.495, -0.146],
        [0.146, 0.495, -0.260],
        [0.000, 0.495, -0.260],
        [0.260, 0.465, 0.000],
        [0.260, 0.465, -0.146],
        [0.146, 0.465, -0.260],
        [0.000, 0.465, -0.260],
    ],
    [
        [0.000, 0.525, -0.040],
        [-0.022, 0.525, -0.040],
        [-0.040, 0.525, -0.022],
        [-0.040, 0.525, 0.000],
        [0.000, 0.495, -0.080],
        [-0.045, 0.495, -0.080],
        [-0.080, 0.495, -0.045],
        [-0.080, 0.495, 0.000],
        [0.000, 0.495, -0.260],
        [-0.146, 0.495, -0.260],
        [-0.260, 0.495, -0.146],
        [-0.260, 0.495, 0.000],
        [0.000, 0.465, -0.260],
        [-0.146, 0.465, -0.260],
        [-0.260, 0.465, -0.146],
        [-0.260, 0.465, 0.000],
    ],
    [
        [-0.040, 0.525, 0.000],
        [-0.040, 0.525, 0.022],
        [-0.022, 0.525, 0.040],
        [0.000, 0.525, 0.040],
        [-0.080, 0.495, 0.000],
        [-0.080, 0.495, 0.045],
        [-0.045, 0.495, 0.080],
        [0.000, 0.495, 0.080],
        [-0.260, 0.495, 0.000],
        [-0.260, 0.495, 0.146],
        [-0.146, 0.495, 0.260],
        [0.000, 0.495, 0.260],
        [-0.260, 0.465, 0.000],
        [-0.260, 0.465, 0.146],
        [-0.146, 0.465, 0.260],
        [0.000, 0.465, 0.260],
    ],
    [
        [0.000, 0.525, 0.040],
        [0.022, 0.525, 0.040],
        [0.040, 0.525, 0.022],
        [0.040, 0.525, 0.000],
        [0.000, 0.495, 0.080],
        [0.045, 0.495, 0.080],
        [0.080, 0.495, 0.045],
        [0.080, 0.495, 0.000],
        [0.000, 0.495, 0.260],
        [0.146, 0.495, 0.260],
        [0.260, 0.495, 0.146],
        [0.260, 0.495, 0.000],
        [0.000, 0.465, 0.260],
        [0.146, 0.465, 0.260],
        [0.260, 0.465, 0.146],
        [0.260, 0.465, 0.000],
    ],
    [
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.285, 0.000, 0.000],
        [0.285, 0.000, 0.160],
        [0.160, 0.000, 0.285],
        [0.000, 0.000, 0.285],
        [0.300, 0.000, 0.000],
        [0.300, 0.000, 0.168],
        [0.168, 0.000, 0.300],
        [0.000, 0.000, 0.300],
        [0.300, 0.015, 0.000],
        [0.300, 0.015, 0.168],
        [0.168, 0.015, 0.300],
        [0.000, 0.015, 0.300],
    ],
    [
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.285],
        [-0.160, 0.000, 0.285],
        [-0.285, 0.000, 0.160],
        [-0.285, 0.000, 0.000],
        [0.000, 0.000, 0.300],
        [-0.168, 0.000, 0.300],
        [-0.300, 0.000, 0.168],
        [-0.300, 0.000, 0.000],
        [0.000, 0.015, 0.300],
        [-0.168, 0.015, 0.300],
        [-0.300, 0.015, 0.168],
        [-0.300, 0.015, 0.000],
    ],
    [
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [-0.285, 0.000, 0.000],
        [-0.285, 0.000, -0.160],
        [-0.160, 0.000, -0.285],
        [0.000, 0.000, -0.285],
        [-0.300, 0.000, 0.000],
        [-0.300, 0.000, -0.168],
        [-0.168, 0.000, -0.300],
        [0.000, 0.000, -0.300],
        [-0.300, 0.015, 0.000],
        [-0.300, 0.015, -0.168],
        [-0.168, 0.015, -0.300],
        [0.000, 0.015, -0.300],
    ],
    [
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.000, 0.000, 0.000],
        [0.000, 0.000, -0.285],
        [0.160, 0.000, -0.285],
        [0.285, 0.000, -0.160],
        [0.285, 0.000, 0.000],
        [0.000, 0.000, -0.300],
        [0.168, 0.000, -0.300],
        [0.300, 0.000, -0.168],
        [0.300, 0.000, 0.000],
        [0.000, 0.015, -0.300],
        [0.168, 0.015, -0.300],
        [0.300, 0.015, -0.168],
        [0.300, 0.015, 0.000],
    ],
];
