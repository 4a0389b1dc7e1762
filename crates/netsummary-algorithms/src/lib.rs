pub mod common;
pub mod community;
pub mod degree;
pub mod topology;
pub mod assortativity;
pub mod pathfinding;

pub use common::{Direction, GraphView, NodeIndex, ProjectedNeighbors, UndirectedView};
pub use community::{weakly_connected_components, ComponentSet};
pub use degree::{in_degrees, max_degree_by, out_degrees, projected_degrees, total_degrees};
pub use topology::{average_clustering, count_triangles, local_clustering};
pub use assortativity::degree_assortativity;
pub use pathfinding::{bfs_distances, estimate_average_distance, DistanceTotals};
