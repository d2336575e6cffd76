mod cuboid_cuboid_distance;
mod rounded_shapes;
