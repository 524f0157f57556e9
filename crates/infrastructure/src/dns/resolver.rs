use super::cache::{store::unix_now, CacheKey, CacheMetrics, RecordCache};
use super::codec::{self, DecodedResponse};
use async_trait::async_trait;
use hoard_dns_application::ports::{DnsTransport, QueryResolver, Resolution};
use hoard_dns_domain::{CacheSnapshot, ResourceRecord};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// The caching resolution core.
///
/// One query at a time: decode, cache lookup, and on a miss forward the raw
/// bytes upstream and cache every record group the response carries. Every
/// failure path collapses into [`Resolution::NoResponse`]; nothing here can
/// take the server loop down.
pub struct ForwardingResolver {
    cache: RecordCache,
    transport: Arc<dyn DnsTransport>,
    query_timeout: Duration,
}

impl ForwardingResolver {
    pub fn new(
        cache: RecordCache,
        transport: Arc<dyn DnsTransport>,
        query_timeout: Duration,
    ) -> Self {
        info!(
            protocol = transport.protocol_name(),
            timeout_secs = query_timeout.as_secs(),
            "Forwarding resolver created"
        );
        Self {
            cache,
            transport,
            query_timeout,
        }
    }

    /// Cache image for the persistence hook.
    pub fn snapshot(&self) -> CacheSnapshot {
        self.cache.to_snapshot()
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_metrics(&self) -> CacheMetrics {
        self.cache.metrics()
    }

    /// Group every record across answer/authority/additional by
    /// `(type, name)` and cache each group under its own key. The upstream
    /// may answer for names besides the one queried (glue, name servers), so
    /// grouping runs over record identity, not the query key.
    ///
    /// A group's TTL is the minimum across its records, and the whole
    /// response is stamped with a single `now`.
    fn populate(&mut self, response: &DecodedResponse) {
        let mut groups: Vec<(CacheKey, Vec<ResourceRecord>, u32)> = Vec::new();
        let mut index: FxHashMap<CacheKey, usize> = FxHashMap::default();

        for record in response.all_records() {
            let key = CacheKey::new(&record.name, record.record_type);
            match index.get(&key) {
                Some(&slot) => {
                    let group = &mut groups[slot];
                    group.1.push(record.clone());
                    group.2 = group.2.min(record.ttl);
                }
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push((key, vec![record.clone()], record.ttl));
                }
            }
        }

        let now = unix_now();
        let group_count = groups.len();
        for (key, records, ttl) in groups {
            self.cache.put_at(key, records, ttl, now);
        }

        debug!(
            groups = group_count,
            cache_size = self.cache.len(),
            "Cache populated from upstream response"
        );
    }
}

#[async_trait]
impl QueryResolver for ForwardingResolver {
    async fn resolve(&mut self, raw_query: &[u8]) -> Resolution {
        let query = match codec::decode_query(raw_query) {
            Ok(query) => query,
            Err(e) => {
                debug!(error = %e, "Dropping undecodable query");
                return Resolution::NoResponse;
            }
        };

        let key = CacheKey::new(&query.qname, query.qtype);

        if let Some(records) = self.cache.get(&key) {
            let answers = records.len();
            return match codec::encode_cached_reply(&query, records) {
                Ok(bytes) => {
                    debug!(key = %key, answers, "Served from cache");
                    Resolution::Answered {
                        bytes,
                        cache_hit: true,
                    }
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Failed to synthesize cached reply");
                    Resolution::NoResponse
                }
            };
        }

        let response = match self.transport.send(raw_query, self.query_timeout).await {
            Ok(response) => response,
            Err(e) => {
                warn!(key = %key, error = %e, "Upstream exchange failed");
                return Resolution::NoResponse;
            }
        };

        let decoded = match codec::decode_response(&response.bytes) {
            Ok(decoded) => decoded,
            Err(e) => {
                debug!(key = %key, error = %e, "Dropping undecodable upstream response");
                return Resolution::NoResponse;
            }
        };

        if !decoded.success {
            debug!(key = %key, rcode = decoded.rcode, "Upstream returned an error; dropping");
            return Resolution::NoResponse;
        }

        self.populate(&decoded);

        Resolution::Answered {
            bytes: response.bytes,
            cache_hit: false,
        }
    }
}
