use std::num::ParseIntError;

use serde::de::DeserializeOwned;

use super::patch::patch_response;
use crate::domain::Method;

const BODY_EXCERPT_CHARS: usize = 64;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an integer response, got {body:?}")]
    Integer {
        body: String,
        #[source]
        source: ParseIntError,
    },

    #[error("expected a boolean response, got {body:?}")]
    Boolean { body: String },
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

/// Bare decimal token, e.g. `42`.
pub fn decode_int(body: &str) -> Result<i64, DecodeError> {
    let token = body.trim();
    token.parse::<i64>().map_err(|source| DecodeError::Integer {
        body: excerpt(token),
        source,
    })
}

/// Quoted JSON string, e.g. `"Everything's Chimpy!"`.
pub fn decode_string(body: &str) -> Result<String, DecodeError> {
    Ok(serde_json::from_str(body)?)
}

/// Bare boolean token. Besides `true`/`false` the spellings `1`, `t`, `T`,
/// `TRUE`, `True` and their false counterparts are accepted.
pub fn decode_bool(body: &str) -> Result<bool, DecodeError> {
    match body.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(DecodeError::Boolean {
            body: excerpt(other),
        }),
    }
}

/// Structured decode, after the method's text patch (if it has one).
pub fn decode_json<T: DeserializeOwned>(method: Method, body: &str) -> Result<T, DecodeError> {
    let patched = patch_response(method, body);
    Ok(serde_json::from_str(&patched)?)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::fmt::Debug;

    use serde::Serialize;
    use serde_json::json;

    use super::*;
    use crate::domain::{
        AccountContact, AccountDetails, AccountModule, AccountOrder, Campaign, CampaignTracking,
        CampaignsResponse, ChimpTime, ChimpTimeLayout, ClickStats, ClientPlatform, EmailClient,
        GrowthHistoryEntry, JsonDocument, ListActivity, ListClientsResponse, SegmentOptions,
    };

    fn assert_round_trip<T>(method: Method, value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + Debug,
    {
        let body = serde_json::to_string(value).unwrap();
        let decoded: T = decode_json(method, &body).unwrap();
        assert_eq!(&decoded, value, "body: {body}");
    }

    #[test]
    fn decode_int_parses_bare_token() {
        assert_eq!(decode_int("42").unwrap(), 42);
        assert_eq!(decode_int(" 7\n").unwrap(), 7);
        assert!(matches!(
            decode_int("\"42\""),
            Err(DecodeError::Integer { .. })
        ));
        assert!(matches!(
            decode_int("forty-two"),
            Err(DecodeError::Integer { .. })
        ));
    }

    #[test]
    fn decode_bool_accepts_literal_tokens() {
        assert!(decode_bool("true").unwrap());
        assert!(!decode_bool("false").unwrap());
        assert!(decode_bool("1").unwrap());
        assert!(!decode_bool("False").unwrap());
        assert!(matches!(
            decode_bool("yes"),
            Err(DecodeError::Boolean { .. })
        ));
    }

    #[test]
    fn decode_string_unquotes() {
        assert_eq!(
            decode_string(r#""Everything's Chimpy!""#).unwrap(),
            "Everything's Chimpy!"
        );
        assert_eq!(decode_string(r#""a\"bé""#).unwrap(), "a\"bé");
        assert!(matches!(
            decode_string("Everything's Chimpy!"),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn list_clients_members_decode_as_integers() {
        let body = r#"
        {
          "desktop": {
            "penetration": 0.83050847457627,
            "clients": [
              {"client": "Outlook", "icon": "outlook.png", "percent": 0.016949152542373, "members": "1"}
            ]
          },
          "mobile": {
            "penetration": 0.16949152542373,
            "clients": [
              {"client": "iPhone", "icon": "iphone.png", "percent": 0.1, "members":"9"},
              {"client": "Android", "icon": "android.png", "percent": 0.05, "members":"2"}
            ]
          }
        }
        "#;

        let parsed: ListClientsResponse = decode_json(Method::ListClients, body).unwrap();
        assert_eq!(parsed.mobile.clients[0].members, 9);
        assert_eq!(parsed.mobile.clients[1].client, "Android");
        assert!((parsed.desktop.penetration - 0.830_508_474_576_27).abs() < 1e-12);
        assert!((parsed.desktop.clients[0].percent - 0.016_949_152_542_373).abs() < 1e-12);
        assert_eq!(parsed.desktop.clients[0].members, 1);
    }

    #[test]
    fn quoted_members_fail_without_the_patch() {
        let body = r#"{"mobile":{"clients":[{"members":"9"}]}}"#;
        assert!(decode_json::<ListClientsResponse>(Method::ListClients, body).is_ok());
        assert!(matches!(
            decode_json::<ListClientsResponse>(Method::CampaignStats, body),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn growth_history_counters_and_months_decode() {
        let body = r#"[
          {"month":"2011-05","existing":"0","imports":"0","optins":"1"},
          {"month":"2011-06","existing":"2","imports":"0","optins":"0"},
          {"month":"2011-07","existing":"2","imports":"1","optins":"0"},
          {"month":"2011-08","existing":"3","imports":"0","optins":"1"}
        ]"#;

        let parsed: Vec<GrowthHistoryEntry> =
            decode_json(Method::ListGrowthHistory, body).unwrap();
        let first_month = parsed[0].month.unwrap();
        assert_eq!(first_month.layout(), ChimpTimeLayout::Month);
        assert_eq!(first_month.to_string(), "2011-05");
        assert_eq!(parsed[1].existing, 2);
        assert_eq!(parsed[2].imports, 1);
        assert_eq!(parsed[3].optins, 1);
    }

    #[test]
    fn list_activity_reads_day_dates() {
        let body = r#"[
          {"user_id":1234567,"day":"2011-01-03","emails_sent":100,"unique_opens":50,"recipient_clicks":40,
           "hard_bounce":0,"soft_bounce":1,"abuse_reports":0,"subs":2,"unsubs":1,"other_adds":0,"other_removes":0},
          {"user_id":1234567,"day":"","emails_sent":0}
        ]"#;

        let parsed: Vec<ListActivity> = decode_json(Method::ListActivity, body).unwrap();
        assert_eq!(parsed[0].user_id, 1_234_567);
        assert_eq!(parsed[0].recipient_clicks, 40);
        assert_eq!(parsed[0].day.map(|day| day.to_string()).as_deref(), Some("2011-01-03"));
        assert_eq!(parsed[1].day, None);
        assert_eq!(parsed[1].other_adds, 0);
    }

    #[test]
    fn malformed_dates_surface_as_decode_errors() {
        let body = r#"[{"day":"January 3rd"}]"#;
        assert!(matches!(
            decode_json::<Vec<ListActivity>>(Method::ListActivity, body),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn click_stats_decode_into_url_map() {
        let body = r#"{"http://example.com/a":{"clicks":5,"unique":3},"http://example.com/b":{"clicks":1,"unique":1}}"#;
        let parsed: BTreeMap<String, ClickStats> =
            decode_json(Method::CampaignClickStats, body).unwrap();
        assert_eq!(
            parsed["http://example.com/a"],
            ClickStats {
                clicks: 5,
                unique: 3
            }
        );
    }

    #[test]
    fn campaigns_keep_untyped_sections_as_documents() {
        let body = r#"{
          "total": 1,
          "data": [{
            "id": "c1", "web_id": 42, "list_id": "l1", "folder_id": null, "title": "Spring",
            "type": "rss", "send_time": null, "emails_sent": 0, "status": "save",
            "tracking": {"html_clicks": true, "text_clicks": false, "opens": true},
            "segment_opts": {"match": "all", "conditions": [{"field": "date", "op": "gt", "value": "last_campaign_sent"}]},
            "type_opts": {"url": "http://example.com/feed", "schedule": "daily"}
          }]
        }"#;

        let parsed: CampaignsResponse = decode_json(Method::Campaigns, body).unwrap();
        let campaign = &parsed.data[0];
        assert_eq!(campaign.kind, "rss");
        assert_eq!(campaign.folder_id, None);
        assert_eq!(campaign.send_time, None);
        assert!(campaign.tracking.html_clicks);
        assert_eq!(campaign.segment_opts.match_mode, "all");
        assert_eq!(campaign.segment_opts.conditions[0].str_at("/op"), Some("gt"));
        assert_eq!(campaign.type_opts.str_at("/schedule"), Some("daily"));
    }

    #[test]
    fn raw_documents_accept_any_json() {
        let doc: JsonDocument = decode_json(Method::CampaignEepUrlStats, "[]").unwrap();
        assert!(doc.as_value().is_array());
    }

    #[test]
    fn structured_decode_rejects_invalid_json() {
        assert!(matches!(
            decode_json::<CampaignsResponse>(Method::Campaigns, "{ not json }"),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn campaigns_round_trip() {
        let campaigns = CampaignsResponse {
            total: 2,
            data: vec![
                Campaign {
                    id: "c1".to_owned(),
                    web_id: 42,
                    list_id: "l1".to_owned(),
                    folder_id: Some(7),
                    title: "Spring".to_owned(),
                    kind: "regular".to_owned(),
                    send_time: Some("2012-03-01 10:00:00".to_owned()),
                    emails_sent: 200,
                    tracking: CampaignTracking {
                        html_clicks: true,
                        text_clicks: false,
                        opens: true,
                    },
                    segment_opts: SegmentOptions {
                        match_mode: "any".to_owned(),
                        conditions: vec![JsonDocument::new(
                            json!({ "field": "date", "op": "gt", "value": "2012-01-01" }),
                        )],
                    },
                    ..Campaign::default()
                },
                Campaign {
                    id: "c2".to_owned(),
                    kind: "rss".to_owned(),
                    type_opts: JsonDocument::new(json!({ "url": "http://example.com/feed" })),
                    ..Campaign::default()
                },
            ],
        };
        assert!(campaigns.data[0].type_opts.is_null());
        assert_round_trip(Method::Campaigns, &campaigns);
    }

    #[test]
    fn growth_history_round_trips_through_its_patch() {
        let history = vec![
            GrowthHistoryEntry {
                month: Some(ChimpTime::parse("2011-05").unwrap()),
                existing: 2,
                imports: 0,
                optins: 13,
            },
            GrowthHistoryEntry {
                month: None,
                existing: 3,
                imports: 1,
                optins: 0,
            },
        ];
        assert_round_trip(Method::ListGrowthHistory, &history);
    }

    #[test]
    fn list_clients_round_trip_through_their_patch() {
        let clients = ListClientsResponse {
            desktop: ClientPlatform {
                penetration: 0.75,
                clients: vec![EmailClient {
                    client: "Outlook".to_owned(),
                    icon: "outlook.png".to_owned(),
                    percent: 0.5,
                    members: 12,
                }],
            },
            mobile: ClientPlatform {
                penetration: 0.25,
                clients: vec![EmailClient {
                    client: "iPhone".to_owned(),
                    icon: "iphone.png".to_owned(),
                    percent: 0.125,
                    members: 9,
                }],
            },
        };
        assert_round_trip(Method::ListClients, &clients);
    }

    #[test]
    fn account_details_round_trip() {
        let details = AccountDetails {
            username: "chimp".to_owned(),
            user_id: "u1".to_owned(),
            is_approved: true,
            plan_type: "monthly".to_owned(),
            plan_high: 2500,
            first_payment: Some("2011-01-01 00:00:00".to_owned()),
            last_payment: None,
            contact: AccountContact {
                fname: "Freddie".to_owned(),
                company: "MailChimp".to_owned(),
                ..AccountContact::default()
            },
            modules: vec![AccountModule {
                name: "Ecommerce360".to_owned(),
                added: "2011-01-01 00:00:00".to_owned(),
            }],
            orders: vec![AccountOrder {
                order_id: 1,
                kind: "monthly".to_owned(),
                amount: 10.5,
                date: "2011-02-01 00:00:00".to_owned(),
                credits_used: 0.0,
            }],
            ..AccountDetails::default()
        };
        assert_round_trip(Method::GetAccountDetails, &details);
    }
}
