pub mod collision_vis3d;
