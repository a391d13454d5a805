//! Listen Notes API endpoints
//!
//! Each endpoint is a fixed verb and path; identifiers are substituted into the
//! path verbatim and must already be URL-safe.
//! API documentation: <https://www.listennotes.com/api/docs/>

use crate::constants::FORM_FIELD_IDS;
use crate::models::Response;
use crate::services::client::{Args, FormFields, PodcastClient};
use crate::utils::error::ApiResult;

/// Comma-join identifiers into the single `ids` form field used by batch fetches
fn ids_form<S: AsRef<str>>(ids: &[S]) -> FormFields {
    let joined = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
    FormFields::from([(FORM_FIELD_IDS.to_string(), vec![joined])])
}

/// Move every argument into the form body
fn args_form(args: &Args) -> FormFields {
    args.iter()
        .map(|(k, v)| (k.clone(), vec![v.clone()]))
        .collect()
}

impl PodcastClient {
    /// Full-text search on episodes, podcasts, or curated lists of podcasts
    pub async fn search(&self, args: &Args) -> ApiResult<Response> {
        self.get("search", args).await
    }

    /// Search episodes by title only
    pub async fn search_episode_titles(&self, args: &Args) -> ApiResult<Response> {
        self.get("search_episode_titles", args).await
    }

    /// Autosuggestions for search terms, podcasts and genres
    pub async fn typeahead(&self, args: &Args) -> ApiResult<Response> {
        self.get("typeahead", args).await
    }

    pub async fn spellcheck(&self, args: &Args) -> ApiResult<Response> {
        self.get("spellcheck", args).await
    }

    pub async fn fetch_related_searches(&self, args: &Args) -> ApiResult<Response> {
        self.get("related_searches", args).await
    }

    pub async fn fetch_trending_searches(&self, args: &Args) -> ApiResult<Response> {
        self.get("trending_searches", args).await
    }

    /// Best podcasts by genre
    pub async fn fetch_best_podcasts(&self, args: &Args) -> ApiResult<Response> {
        self.get("best_podcasts", args).await
    }

    /// Podcast metadata and its episodes
    pub async fn fetch_podcast_by_id(&self, id: &str, args: &Args) -> ApiResult<Response> {
        self.get(&format!("podcasts/{}", id), args).await
    }

    pub async fn fetch_episode_by_id(&self, id: &str, args: &Args) -> ApiResult<Response> {
        self.get(&format!("episodes/{}", id), args).await
    }

    /// Fetch several podcasts at once; other arguments stay in the query string
    pub async fn batch_fetch_podcasts<S: AsRef<str>>(
        &self,
        ids: &[S],
        args: &Args,
    ) -> ApiResult<Response> {
        self.post("podcasts", args, &ids_form(ids)).await
    }

    /// Fetch several episodes at once; other arguments stay in the query string
    pub async fn batch_fetch_episodes<S: AsRef<str>>(
        &self,
        ids: &[S],
        args: &Args,
    ) -> ApiResult<Response> {
        self.post("episodes", args, &ids_form(ids)).await
    }

    pub async fn fetch_curated_podcasts_list_by_id(
        &self,
        id: &str,
        args: &Args,
    ) -> ApiResult<Response> {
        self.get(&format!("curated_podcasts/{}", id), args).await
    }

    pub async fn fetch_curated_podcasts_lists(&self, args: &Args) -> ApiResult<Response> {
        self.get("curated_podcasts", args).await
    }

    pub async fn fetch_podcast_genres(&self, args: &Args) -> ApiResult<Response> {
        self.get("genres", args).await
    }

    pub async fn fetch_podcast_regions(&self, args: &Args) -> ApiResult<Response> {
        self.get("regions", args).await
    }

    pub async fn fetch_podcast_languages(&self, args: &Args) -> ApiResult<Response> {
        self.get("languages", args).await
    }

    /// A random podcast episode
    pub async fn just_listen(&self, args: &Args) -> ApiResult<Response> {
        self.get("just_listen", args).await
    }

    pub async fn fetch_recommendations_for_podcast(
        &self,
        id: &str,
        args: &Args,
    ) -> ApiResult<Response> {
        self.get(&format!("podcasts/{}/recommendations", id), args).await
    }

    pub async fn fetch_recommendations_for_episode(
        &self,
        id: &str,
        args: &Args,
    ) -> ApiResult<Response> {
        self.get(&format!("episodes/{}/recommendations", id), args).await
    }

    pub async fn fetch_my_playlists(&self, args: &Args) -> ApiResult<Response> {
        self.get("playlists", args).await
    }

    pub async fn fetch_playlist_by_id(&self, id: &str, args: &Args) -> ApiResult<Response> {
        self.get(&format!("playlists/{}", id), args).await
    }

    /// Submit a podcast to the database; all arguments go in the form body
    pub async fn submit_podcast(&self, args: &Args) -> ApiResult<Response> {
        self.post("podcasts/submit", &Args::new(), &args_form(args)).await
    }

    /// Request the deletion of a podcast
    pub async fn delete_podcast(&self, id: &str, args: &Args) -> ApiResult<Response> {
        self.delete(&format!("podcasts/{}", id), args).await
    }

    pub async fn fetch_audience_for_podcast(&self, id: &str, args: &Args) -> ApiResult<Response> {
        self.get(&format!("podcasts/{}/audience", id), args).await
    }

    /// Podcasts published under a domain name
    pub async fn fetch_podcasts_by_domain(
        &self,
        domain_name: &str,
        args: &Args,
    ) -> ApiResult<Response> {
        self.get(&format!("podcasts/domains/{}", domain_name), args).await
    }
}
