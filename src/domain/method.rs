use std::fmt;

macro_rules! methods {
    ($($variant:ident => $wire:literal,)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        /// Remote MailChimp 1.3 method, sent as the `method` query parameter.
        pub enum Method {
            $($variant,)*
        }

        impl Method {
            /// Every method the client knows, in declaration order.
            pub const ALL: &'static [Method] = &[$(Method::$variant,)*];

            /// Name used on the wire, e.g. `listGrowthHistory`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }

            /// Look up a method by its wire name.
            pub fn from_wire_name(name: &str) -> Option<Self> {
                match name {
                    $($wire => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

methods! {
    CampaignContent => "campaignContent",
    CampaignCreate => "campaignCreate",
    CampaignDelete => "campaignDelete",
    CampaignEcommOrderAdd => "campaignEcommOrderAdd",
    CampaignPause => "campaignPause",
    CampaignReplicate => "campaignReplicate",
    CampaignResume => "campaignResume",
    CampaignSchedule => "campaignSchedule",
    CampaignSegmentTest => "campaignSegmentTest",
    CampaignSendNow => "campaignSendNow",
    CampaignSendTest => "campaignSendTest",
    CampaignShareReport => "campaignShareReport",
    CampaignTemplateContent => "campaignTemplateContent",
    CampaignUnschedule => "campaignUnschedule",
    CampaignUpdate => "campaignUpdate",
    Campaigns => "campaigns",
    CampaignAbuseReports => "campaignAbuseReports",
    CampaignAdvice => "campaignAdvice",
    CampaignAnalytics => "campaignAnalytics",
    CampaignBounceMessage => "campaignBounceMessage",
    CampaignBounceMessages => "campaignBounceMessages",
    CampaignClickStats => "campaignClickStats",
    CampaignEcommOrders => "campaignEcommOrders",
    CampaignEepUrlStats => "campaignEepUrlStats",
    CampaignEmailDomainPerformance => "campaignEmailDomainPerformance",
    CampaignGeoOpens => "campaignGeoOpens",
    CampaignGeoOpensForCountry => "campaignGeoOpensForCountry",
    CampaignMembers => "campaignMembers",
    CampaignStats => "campaignStats",
    CampaignUnsubscribes => "campaignUnsubscribes",
    CampaignClickDetailAim => "campaignClickDetailAIM",
    CampaignEmailStatsAim => "campaignEmailStatsAIM",
    CampaignEmailStatsAimAll => "campaignEmailStatsAIMAll",
    CampaignNotOpenedAim => "campaignNotOpenedAIM",
    CampaignOpenedAim => "campaignOpenedAIM",
    EcommOrderAdd => "ecommOrderAdd",
    EcommOrderDel => "ecommOrderDel",
    EcommOrders => "ecommOrders",
    FolderAdd => "folderAdd",
    FolderDel => "folderDel",
    FolderUpdate => "folderUpdate",
    Folders => "folders",
    GmonkeyActivity => "gmonkeyActivity",
    GmonkeyAdd => "gmonkeyAdd",
    GmonkeyDel => "gmonkeyDel",
    GmonkeyMembers => "gmonkeyMembers",
    CampaignsForEmail => "campaignsForEmail",
    ChimpChatter => "chimpChatter",
    GenerateText => "generateText",
    GetAccountDetails => "getAccountDetails",
    GetVerifiedDomains => "getVerifiedDomains",
    InlineCss => "inlineCss",
    ListsForEmail => "listsForEmail",
    Ping => "ping",
    ListAbuseReports => "listAbuseReports",
    ListActivity => "listActivity",
    ListBatchSubscribe => "listBatchSubscribe",
    ListBatchUnsubscribe => "listBatchUnsubscribe",
    ListClients => "listClients",
    ListGrowthHistory => "listGrowthHistory",
    ListInterestGroupAdd => "listInterestGroupAdd",
    ListInterestGroupDel => "listInterestGroupDel",
    ListInterestGroupUpdate => "listInterestGroupUpdate",
    ListInterestGroupingAdd => "listInterestGroupingAdd",
    ListInterestGroupingUpdate => "listInterestGroupingUpdate",
    ListInterestGroupingDel => "listInterestGroupingDel",
    ListInterestGroupings => "listInterestGroupings",
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
