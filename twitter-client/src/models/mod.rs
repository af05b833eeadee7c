//! Twitter REST API 数据模型

mod card;
mod collection;
mod configuration;
mod errors;
mod media;
mod persisted;
mod search;
mod tweet;
mod user;

pub use card::{BindingValue, BindingValues, Card, ImageValue, UserValue};
pub use collection::{Position, TimelineItem, TweetItem, TwitterCollection, TwitterCollectionContent, TwitterCollectionMetadata};
pub use configuration::{Configuration, MediaSize, SizeEntities};
pub use errors::{ApiError, ApiErrors};
pub use media::{Media, MediaImage};
pub use persisted::{Followers, PersistedList, UserTweets};
pub use search::{Search, SearchMetadata};
pub use tweet::{HashtagEntity, MediaEntity, MentionEntity, SymbolEntity, Tweet, TweetEntities, UrlEntity};
pub use user::User;
