/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Login request and response models
pub mod auth;
/// URL normalization, header building and dispatch
pub mod http;
/// Request description consumed by the pipeline
pub mod request;
/// Response envelope returned by every call
pub mod response;
