/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
/// HTTP request executor shared by every handle of a client
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
