mod add_friend;
mod friends;
mod home;
mod split_bill;

pub use add_friend::AddFriendPanel;
pub use friends::{FriendList, FriendRow};
pub use home::HomeScreen;
pub use split_bill::SplitBillPanel;
