mod http_assistant_api_test;
