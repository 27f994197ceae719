//! Hosts module - hosts and their group membership

mod api;
