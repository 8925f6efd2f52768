use crate::application::resource::ResourcePath;

/// Interface for Portainer resource handles
///
/// Each call returns a new handle and performs no I/O.
pub trait PortainerResources {
    /// Docker registries
    fn registries(&self) -> ResourcePath;

    /// Environments (endpoints)
    fn endpoints(&self) -> ResourcePath;

    /// Stacks
    fn stacks(&self) -> ResourcePath;

    /// Users
    fn users(&self) -> ResourcePath;

    /// Teams
    fn teams(&self) -> ResourcePath;

    /// Team memberships of a user
    fn user_memberships(&self, user_id: u32) -> ResourcePath {
        self.users().child(user_id).child("memberships")
    }

    /// Memberships of a team
    fn team_memberships(&self, team_id: u32) -> ResourcePath {
        self.teams().child(team_id).child("memberships")
    }
}
