//! Typed results, one schema per remote method.

mod campaign;
mod ecomm;
mod folder;
mod gmonkey;
mod helper;
mod list;
mod stats;

pub use campaign::{
    Campaign, CampaignContent, CampaignShareReport, CampaignTracking, CampaignsResponse,
    SegmentOptions,
};
pub use ecomm::{EcommOrder, EcommOrderLine, EcommOrdersResponse};
pub use folder::Folder;
pub use gmonkey::{
    GeoLocation, GmonkeyActivity, GmonkeyBatchError, GmonkeyBatchResult, GmonkeyMember,
};
pub use helper::{
    AccountContact, AccountDetails, AccountModule, AccountOrder, AccountRewards, AppliedReward,
    ChatterItem, Referral, RewardBalance, VerifiedDomain,
};
pub use list::{
    BatchMemberError, BatchSubscribeResponse, BatchUnsubscribeResponse, ClientPlatform,
    EmailClient, GrowthHistoryEntry, InterestGroup, InterestGrouping, ListAbuseReport,
    ListAbuseReportsResponse, ListActivity, ListClientsResponse,
};
pub use stats::{
    AbsplitStats, AimAction, AnalyticsGoal, BounceMessage, BounceMessagesResponse,
    CampaignAbuseReport, CampaignAbuseReportsResponse, CampaignAdvice, CampaignAnalytics,
    CampaignMember, CampaignMembersResponse, CampaignStats, CampaignUnsubscribe,
    CampaignUnsubscribesResponse, ClickDetailAimResponse, ClickStats, CountryOpens,
    EepClickLocation, EepClickReferrer, EepTwitter, EepTwitterClicks, EepTwitterStatus,
    EepUrlStats, EmailDomainPerformance, EmailStatsAimAllResponse, EmailStatsAimResponse,
    MemberClicks, MemberOpens, NotOpenedAimResponse, OpenedAimResponse, RegionOpens,
    TimeseriesPoint, TimewarpStats,
};
